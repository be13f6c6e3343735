//! Collision and coverage checks for a configuration's footprint.
//!
//! Pure functions over a [`Grid`] — no side effects, no owned state.

#[doc(hidden)]
mod test;

use crate::grid::Grid;
use crate::motion::{footprint, Orientation};

/// True iff all six footprint cells of `(x, y, orientation)` lie inside
/// the grid and are not walls.
pub fn fits(grid: &Grid, x: i32, y: i32, orientation: Orientation) -> bool {
    footprint(orientation)
        .iter()
        .all(|&(dx, dy)| grid.is_free(x + dx, y + dy))
}

/// The six `(x, y)` footprint cells of `(x, y, orientation)`, in the
/// maneuver table's anchor-first order.
pub fn covered_cells(x: i32, y: i32, orientation: Orientation) -> [(i32, i32); 6] {
    let mut cells = [(0, 0); 6];
    for (slot, &(dx, dy)) in cells.iter_mut().zip(footprint(orientation).iter()) {
        *slot = (x + dx, y + dy);
    }
    cells
}
