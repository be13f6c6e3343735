//! The vehicle's rigid footprint and its eight-maneuver transition table.
//!
//! Both tables are pure lookups with no side effects; this module owns no
//! state and performs no validation of its own (that is the job of the
//! [`crate::oracle`] module, which the maneuver table's destinations must
//! always be re-checked against).

#[doc(hidden)]
mod test;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One of the vehicle's four rigid configurations. The variant fixes both
/// the shape of the six-cell footprint and, jointly with the anchor cell,
/// the vehicle's exact position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    O0 = 0,
    O1 = 1,
    O2 = 2,
    O3 = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Orientation::O0, Orientation::O1, Orientation::O2, Orientation::O3];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Orientation {
        match index {
            0 => Orientation::O0,
            1 => Orientation::O1,
            2 => Orientation::O2,
            _ => Orientation::O3,
        }
    }
}

/// The six `(dx, dy)` footprint offsets from the anchor, per orientation.
///
/// Matches `GetCarBody`'s layout in the vehicle's original C/raylib build.
pub const FOOTPRINT: [[(i32, i32); 6]; 4] = [
    [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-2, 0), (0, 1), (-1, 1), (-2, 1)],
    [(0, 0), (-1, 0), (0, -1), (-1, -1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (2, 0), (0, -1), (1, -1), (2, -1)],
];

/// One of the eight one-step transitions available from an orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maneuver {
    pub new_orientation: Orientation,
    pub dx: i32,
    pub dy: i32,
    pub fuel: i32,
}

const fn m(new_orientation: Orientation, dx: i32, dy: i32, fuel: i32) -> Maneuver {
    Maneuver { new_orientation, dx, dy, fuel }
}

/// The literal eight-maneuver table, indexed `[orientation][maneuver]`.
///
/// Reproduced from `Mode_Movement_Fuel`'s values: eight maneuvers per
/// orientation with fuel pattern `{1,1,3,3,3,3,3,3}`. Ordering is part of
/// the contract: it seeds tie-breaking in the search.
pub const TRANSITIONS: [[Maneuver; 8]; 4] = [
    [
        m(Orientation::O0, 0, 1, 1),
        m(Orientation::O0, 0, -1, 1),
        m(Orientation::O0, 1, 0, 3),
        m(Orientation::O0, -1, 0, 3),
        m(Orientation::O1, 2, 0, 3),
        m(Orientation::O1, 1, 1, 3),
        m(Orientation::O3, 0, 2, 3),
        m(Orientation::O3, -1, 1, 3),
    ],
    [
        m(Orientation::O1, 1, 0, 1),
        m(Orientation::O1, -1, 0, 1),
        m(Orientation::O1, 0, -1, 3),
        m(Orientation::O1, 0, 1, 3),
        m(Orientation::O2, 0, 2, 3),
        m(Orientation::O2, -1, 1, 3),
        m(Orientation::O0, -2, 0, 3),
        m(Orientation::O0, -1, -1, 3),
    ],
    [
        m(Orientation::O2, 0, -1, 1),
        m(Orientation::O2, 0, 1, 1),
        m(Orientation::O2, -1, 0, 3),
        m(Orientation::O2, 1, 0, 3),
        m(Orientation::O3, -2, 0, 3),
        m(Orientation::O3, -1, -1, 3),
        m(Orientation::O1, 0, -2, 3),
        m(Orientation::O1, 1, -1, 3),
    ],
    [
        m(Orientation::O3, -1, 0, 1),
        m(Orientation::O3, 1, 0, 1),
        m(Orientation::O3, 0, 1, 3),
        m(Orientation::O3, 0, -1, 3),
        m(Orientation::O0, 0, -2, 3),
        m(Orientation::O0, 1, -1, 3),
        m(Orientation::O2, 2, 0, 3),
        m(Orientation::O2, 1, 1, 3),
    ],
];

/// Read-only accessor for the eight transitions available from `orientation`.
#[inline]
pub fn transitions(orientation: Orientation) -> &'static [Maneuver; 8] {
    &TRANSITIONS[orientation.index()]
}

/// The six footprint offsets for `orientation`.
#[inline]
pub fn footprint(orientation: Orientation) -> &'static [(i32, i32); 6] {
    &FOOTPRINT[orientation.index()]
}
