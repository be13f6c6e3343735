#![cfg(test)]

use super::*;

fn maze(text: &str) -> Grid {
    Grid::load(text.as_bytes()).expect("maze should load")
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(Grid::load(b""), Err(GridError::Empty)));
}

#[test]
fn rejects_inconsistent_row_lengths() {
    let err = Grid::load(b"111\n11\n111").unwrap_err();
    assert!(matches!(err, GridError::InconsistentRowLength { row: 1, .. }));
}

#[test]
fn rejects_missing_start() {
    let err = Grid::load(b"111\n111\n111").unwrap_err();
    assert!(matches!(err, GridError::MissingStart));
}

#[test]
fn stray_spaces_are_ignored() {
    let g = maze("0 0 0\n0 2 0\n0 0 0");
    assert_eq!(g.rows(), 3);
    assert_eq!(g.cols(), 3);
}

#[test]
fn single_start_marker_is_orientation_0() {
    let g = maze("111\n121\n111");
    let start = g.start_configuration().unwrap();
    assert_eq!(start.x, 1);
    assert_eq!(start.y, 1);
    assert_eq!(start.orientation, Orientation::O0);
}

#[test]
fn two_start_markers_are_orientation_2() {
    let g = maze("1111\n1221\n1111");
    let start = g.start_configuration().unwrap();
    assert_eq!(start.x, 2);
    assert_eq!(start.y, 1);
    assert_eq!(start.orientation, Orientation::O2);
}

#[test]
fn three_start_markers_are_orientation_3_shifted() {
    let g = maze("11111\n12221\n11111");
    let start = g.start_configuration().unwrap();
    assert_eq!(start.x, 1);
    assert_eq!(start.y, 1);
    assert_eq!(start.orientation, Orientation::O3);
}

#[test]
fn objectives_are_discovered_row_major() {
    let g = maze("1131\n1211\n1311");
    let objs = g.objectives();
    assert_eq!(objs.len(), 2);
    assert_eq!((objs[0].x, objs[0].y), (2, 0));
    assert_eq!((objs[1].x, objs[1].y), (1, 2));
    assert!(!objs[0].reachable);
}

#[test]
fn demoting_an_objective_makes_it_free() {
    let mut g = maze("1131\n1211\n1111");
    assert_eq!(g.get(2, 0), Some(Cell::Objective));
    g.demote_objective(2, 0);
    assert_eq!(g.get(2, 0), Some(Cell::Free));
}

#[test]
fn out_of_bounds_is_not_free() {
    let g = maze("111\n121\n111");
    assert!(!g.is_free(-1, 0));
    assert!(!g.is_free(0, -1));
    assert!(!g.is_free(3, 0));
    assert!(!g.is_free(0, 3));
}

#[test]
fn wall_is_not_free() {
    let g = maze("000\n020\n000");
    assert!(!g.is_free(0, 0));
    assert!(g.is_free(1, 1));
}
