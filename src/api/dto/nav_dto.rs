//! Navigation and look DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Position;

/// Request body for `POST /player/nav/goto`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GotoRequest {
    /// Acceptable distance from the destination, in blocks. Must be
    /// non-negative and finite.
    pub radius: f64,
    /// Destination in world space.
    pub target: Position,
}

/// Request body for `POST /player/nav/follow`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowRequest {
    /// Username of the player to follow.
    pub username: String,
}

/// Request body for `POST /player/look_at`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LookAtRequest {
    /// Point to face in world space.
    pub target: Position,
}
