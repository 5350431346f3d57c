//! Combat, chat, and interaction DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Position;

/// Request body for `POST /player/action/attack`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttackRequest {
    /// Username or entity name to attack.
    pub target: String,
}

/// Request body for `POST /player/action/punch`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PunchRequest {
    /// Username or entity name to punch.
    pub target: String,
}

/// Request body for `POST /player/action/say`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SayRequest {
    /// Chat message to relay through the bot.
    pub value: String,
}

/// Request body for `POST /player/action/interact_block`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InteractBlockRequest {
    /// Block position to interact with.
    pub position: Position,
}

/// Request body for `POST /player/action/interact_entity`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InteractEntityRequest {
    /// Username or entity name to interact with.
    pub target: String,
}
