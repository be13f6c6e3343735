#![cfg(test)]

use super::*;
use crate::grid::Grid;

fn maze(text: &str) -> Grid {
    Grid::load(text.as_bytes()).expect("maze should load")
}

#[test]
fn fits_when_all_six_cells_in_bounds_and_free() {
    let g = maze("11111\n11111\n11111\n11111\n11111");
    assert!(fits(&g, 1, 1, Orientation::O0));
}

#[test]
fn does_not_fit_against_a_wall() {
    let g = maze("11111\n11111\n10111\n11111\n11111");
    // footprint for O0 at (1,1) covers (1,1)(2,1)(1,2)(2,2)(1,3)(2,3); (1,2) is a wall.
    assert!(!fits(&g, 1, 1, Orientation::O0));
}

#[test]
fn does_not_fit_out_of_bounds() {
    let g = maze("111\n111\n111");
    assert!(!fits(&g, 2, 2, Orientation::O0));
}

#[test]
fn covered_cells_matches_footprint_offsets() {
    let cells = covered_cells(5, 5, Orientation::O0);
    assert_eq!(cells, [(5, 5), (6, 5), (5, 6), (6, 6), (5, 7), (6, 7)]);
}
