//! World query and POI DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PoiId, Position};

/// Query parameters for `GET /world/find_blocks`.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindBlocksParams {
    /// Block type to search for (e.g. `"diamond_ore"`).
    pub block: String,
    /// Search radius around the bot, in blocks. Defaults to 16.
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
    /// Maximum number of matches to report. Defaults to 1.
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_max_distance() -> f64 {
    16.0
}

fn default_count() -> u32 {
    1
}

/// Request body for `POST /world/register_poi`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterPoiRequest {
    /// Name of the marker, unique within the registry.
    pub name: String,
    /// Location of the marker in world space.
    pub position: Position,
}

/// Response body for `POST /world/register_poi`.
#[derive(Debug, Serialize)]
pub struct RegisterPoiResponse {
    /// Static string naming the acknowledged action.
    pub message: String,
    /// Identifier assigned to the new POI.
    pub poi_id: PoiId,
    /// Echo of the validated request body.
    pub data: RegisterPoiRequest,
}
