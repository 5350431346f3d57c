//! Inventory DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Highest hotbar slot index (hotbar slots are `0..=8`).
pub const MAX_HOTBAR_SLOT: u8 = 8;

/// Highest inventory window slot index (window slots are `0..=44`).
pub const MAX_WINDOW_SLOT: u8 = 44;

/// Request body for `POST /player/inventory/hotbar_select`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HotbarSelectRequest {
    /// Hotbar slot to select, `0..=8`.
    pub slot: u8,
}

/// Request body for `POST /player/inventory/move_item`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveItemRequest {
    /// Source window slot, `0..=44`.
    pub from_slot: u8,
    /// Destination window slot, `0..=44`.
    pub to_slot: u8,
}
