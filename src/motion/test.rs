#![cfg(test)]

use super::*;

#[test]
fn fuel_pattern_is_one_one_three_times_six() {
    for row in &TRANSITIONS {
        let fuels: Vec<i32> = row.iter().map(|m| m.fuel).collect();
        assert_eq!(fuels, vec![1, 1, 3, 3, 3, 3, 3, 3]);
    }
}

#[test]
fn every_orientation_has_eight_transitions() {
    for o in Orientation::ALL {
        assert_eq!(transitions(o).len(), 8);
    }
}

#[test]
fn footprint_anchor_offset_is_zero() {
    for o in Orientation::ALL {
        assert_eq!(footprint(o)[0], (0, 0));
    }
}

#[test]
fn orientation_round_trips_through_index() {
    for o in Orientation::ALL {
        assert_eq!(Orientation::from_index(o.index()), o);
    }
}
