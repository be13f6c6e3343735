//! The vehicle's configuration: an anchor cell plus an orientation.

use crate::motion::Orientation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `(x, y)` is the anchor cell; `orientation` fixes the footprint shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Configuration {
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Configuration { x, y, orientation }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, o{})", self.x, self.y, self.orientation.index())
    }
}
