//! World handlers: entity listing, block search, POI registration.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{Ack, FindBlocksParams, RegisterPoiRequest, RegisterPoiResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /world/get_entities` — Acknowledge an entity query.
#[utoipa::path(
    get,
    path = "/world/get_entities",
    tag = "World",
    summary = "List entities",
    description = "Acknowledges an entity query. Entities are not yet read from the bot.",
    responses(
        (status = 200, description = "Query acknowledged", body = serde_json::Value),
    )
)]
pub async fn get_entities() -> impl IntoResponse {
    Json(Ack::message_only("Fetching entities in the world"))
}

/// `GET /world/find_blocks` — Acknowledge a block search.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on an empty block type, a
/// non-positive search radius, or a zero count.
#[utoipa::path(
    get,
    path = "/world/find_blocks",
    tag = "World",
    summary = "Find blocks of a type",
    description = "Validates and acknowledges a block search. The query is echoed back and not yet dispatched to the bot.",
    params(FindBlocksParams),
    responses(
        (status = 200, description = "Search acknowledged", body = serde_json::Value),
        (status = 400, description = "Invalid search parameters", body = ErrorResponse),
    )
)]
pub async fn find_blocks(
    Query(params): Query<FindBlocksParams>,
) -> Result<impl IntoResponse, GatewayError> {
    if params.block.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "block must not be empty".to_string(),
        ));
    }
    if !params.max_distance.is_finite() || params.max_distance <= 0.0 {
        return Err(GatewayError::InvalidRequest(
            "max_distance must be a positive, finite number".to_string(),
        ));
    }
    if params.count == 0 {
        return Err(GatewayError::InvalidRequest(
            "count must be at least 1".to_string(),
        ));
    }
    Ok(Json(Ack::with_data(
        "Finding blocks of a certain type",
        params,
    )))
}

/// `POST /world/register_poi` — Register a point of interest.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on an empty name and
/// [`GatewayError::DuplicatePoi`] when the name is already taken.
#[utoipa::path(
    post,
    path = "/world/register_poi",
    tag = "World",
    summary = "Register a point of interest",
    description = "Stores a named location marker in the in-memory registry. Names are unique; the first registration wins.",
    request_body = RegisterPoiRequest,
    responses(
        (status = 200, description = "POI registered", body = serde_json::Value),
        (status = 400, description = "Invalid POI", body = ErrorResponse),
        (status = 409, description = "Name already registered", body = ErrorResponse),
    )
)]
pub async fn register_poi(
    State(state): State<AppState>,
    Json(req): Json<RegisterPoiRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let poi_id = state
        .bot_service
        .register_poi(req.name.clone(), req.position)
        .await?;

    Ok(Json(RegisterPoiResponse {
        message: "Registering point of interest".to_string(),
        poi_id,
        data: req,
    }))
}

/// World routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/world/get_entities", get(get_entities))
        .route("/world/find_blocks", get(find_blocks))
        .route("/world/register_poi", post(register_poi))
}
