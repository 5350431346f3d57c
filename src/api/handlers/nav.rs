//! Navigation and look handlers: goto, follow, look_at.
//!
//! All three acknowledge and echo without driving the session; the
//! pathfinding layer that would consume these commands does not exist
//! yet.

use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{Ack, FollowRequest, GotoRequest, LookAtRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /player/nav/goto` — Acknowledge a navigation goal.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on a negative or non-finite
/// radius.
#[utoipa::path(
    post,
    path = "/player/nav/goto",
    tag = "Navigation",
    summary = "Set a navigation goal",
    description = "Validates and acknowledges a navigation goal. The goal is echoed back and not yet dispatched to the bot.",
    request_body = GotoRequest,
    responses(
        (status = 200, description = "Goal acknowledged", body = serde_json::Value),
        (status = 400, description = "Invalid goal", body = ErrorResponse),
    )
)]
pub async fn goto(Json(req): Json<GotoRequest>) -> Result<impl IntoResponse, GatewayError> {
    if !req.radius.is_finite() || req.radius < 0.0 {
        return Err(GatewayError::InvalidRequest(
            "radius must be a non-negative, finite number".to_string(),
        ));
    }
    Ok(Json(Ack::with_data("Going to destination", req)))
}

/// `POST /player/nav/follow` — Acknowledge a follow target.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on an empty username.
#[utoipa::path(
    post,
    path = "/player/nav/follow",
    tag = "Navigation",
    summary = "Follow a player",
    description = "Validates and acknowledges a follow target. The target is echoed back and not yet dispatched to the bot.",
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Target acknowledged", body = serde_json::Value),
        (status = 400, description = "Invalid target", body = ErrorResponse),
    )
)]
pub async fn follow(Json(req): Json<FollowRequest>) -> Result<impl IntoResponse, GatewayError> {
    if req.username.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "username must not be empty".to_string(),
        ));
    }
    Ok(Json(Ack::with_data("Following target", req)))
}

/// `POST /player/look_at` — Acknowledge a look target.
///
/// # Errors
///
/// Never fails once the body deserializes.
#[utoipa::path(
    post,
    path = "/player/look_at",
    tag = "Navigation",
    summary = "Look at a point",
    description = "Validates and acknowledges a look target. The target is echoed back and not yet dispatched to the bot.",
    request_body = LookAtRequest,
    responses(
        (status = 200, description = "Target acknowledged", body = serde_json::Value),
    )
)]
pub async fn look_at(Json(req): Json<LookAtRequest>) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(Ack::with_data("Looking at target", req)))
}

/// Navigation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/player/nav/goto", post(goto))
        .route("/player/nav/follow", post(follow))
        .route("/player/look_at", post(look_at))
}
