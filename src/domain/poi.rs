//! Registered point of interest.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{PoiId, Position};

/// A named location marker registered through the world API.
///
/// POIs are immutable once registered. They are held in memory only and
/// are intended as input for navigation features; nothing consumes them
/// yet beyond the listing surface.
#[derive(Debug, Clone, Serialize)]
pub struct Poi {
    /// Unique POI identifier (immutable after registration).
    pub poi_id: PoiId,

    /// Human-chosen name, unique within the registry.
    pub name: String,

    /// Location of the marker in world space.
    pub position: Position,

    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Poi {
    /// Creates a new `Poi` stamped with the current time.
    #[must_use]
    pub fn new(name: String, position: Position) -> Self {
        Self {
            poi_id: PoiId::new(),
            name,
            position,
            created_at: Utc::now(),
        }
    }
}
