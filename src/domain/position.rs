//! World-space coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A point in the game world.
///
/// Shared by navigation targets, look targets, block positions, and
/// points of interest. Block-grid consumers truncate toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    /// East/west axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// North/south axis.
    pub z: f64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let pos = Position::new(12.0, 64.0, -7.5);
        let json = serde_json::to_string(&pos).unwrap_or_default();
        let back: Option<Position> = serde_json::from_str(&json).ok();
        let Some(back) = back else {
            panic!("deserialization failed");
        };
        assert_eq!(pos, back);
    }

    #[test]
    fn display_is_tuple_format() {
        let pos = Position::new(1.0, 2.0, 3.0);
        assert_eq!(format!("{pos}"), "(1, 2, 3)");
    }
}
