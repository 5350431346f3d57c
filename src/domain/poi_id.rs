//! Type-safe point-of-interest identifier.
//!
//! [`PoiId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that POI identifiers cannot be confused with other UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a registered point of interest.
///
/// Wraps a UUID v4. Generated once at registration time and immutable
/// thereafter. Used as the dictionary key in [`super::PoiRegistry`] and
/// as the discriminator on `poi_registered` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoiId(uuid::Uuid);

impl PoiId {
    /// Creates a new random `PoiId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `PoiId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for PoiId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for PoiId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PoiId> for uuid::Uuid {
    fn from(id: PoiId) -> Self {
        id.0
    }
}
