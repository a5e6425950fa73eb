use serde::{Deserialize, Serialize};

use crate::grid::Point;

/// Unique driver identifier. Ring-expansion admission bookkeeping is keyed
/// on this id, not on structural equality of the whole driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub position: Point,
}

impl Driver {
    pub fn new(id: u32, x: i32, y: i32) -> Self {
        Self {
            id: DriverId(id),
            position: Point::new(x, y),
        }
    }
}
