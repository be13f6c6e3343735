#![cfg(test)]

use super::*;

#[test]
fn decode_encode_round_trips_across_the_full_space() {
    let dims = Dims::new(4, 5, 3);
    for index in 0..dims.total_states() {
        let state = dims.decode(index);
        assert_eq!(dims.encode(state), index);
    }
}

#[test]
fn mask_count_is_a_power_of_two() {
    assert_eq!(Dims::new(3, 3, 0).mask_count, 1);
    assert_eq!(Dims::new(3, 3, 4).mask_count, 16);
}

#[test]
fn encode_is_injective_over_all_fields() {
    let dims = Dims::new(2, 2, 2);
    let mut seen = vec![false; dims.total_states()];
    for y in 0..2 {
        for x in 0..2 {
            for o in Orientation::ALL {
                for mask in 0..dims.mask_count as u32 {
                    let index = dims.encode(State { x, y, orientation: o, mask });
                    assert!(!seen[index], "collision at index {index}");
                    seen[index] = true;
                }
            }
        }
    }
}
