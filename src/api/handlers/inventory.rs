//! Inventory handlers: hotbar selection, contents, item movement.
//!
//! All acknowledge and echo; none drive the session yet.

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    Ack, HotbarSelectRequest, MAX_HOTBAR_SLOT, MAX_WINDOW_SLOT, MoveItemRequest,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /player/inventory/hotbar_select` — Acknowledge a hotbar selection.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] when the slot is outside
/// `0..=8`.
#[utoipa::path(
    post,
    path = "/player/inventory/hotbar_select",
    tag = "Inventory",
    summary = "Select a hotbar slot",
    description = "Validates and acknowledges a hotbar selection. The slot is echoed back and not yet dispatched to the bot.",
    request_body = HotbarSelectRequest,
    responses(
        (status = 200, description = "Selection acknowledged", body = serde_json::Value),
        (status = 400, description = "Slot out of range", body = ErrorResponse),
    )
)]
pub async fn hotbar_select(
    Json(req): Json<HotbarSelectRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if req.slot > MAX_HOTBAR_SLOT {
        return Err(GatewayError::InvalidRequest(format!(
            "slot must be between 0 and {MAX_HOTBAR_SLOT}"
        )));
    }
    Ok(Json(Ack::with_data("Selecting hotbar slot", req)))
}

/// `GET /player/inventory/get` — Acknowledge an inventory query.
#[utoipa::path(
    get,
    path = "/player/inventory/get",
    tag = "Inventory",
    summary = "Fetch inventory contents",
    description = "Acknowledges an inventory query. Contents are not yet read from the bot.",
    responses(
        (status = 200, description = "Query acknowledged", body = serde_json::Value),
    )
)]
pub async fn get_inventory() -> impl IntoResponse {
    Json(Ack::message_only("Fetching inventory contents"))
}

/// `POST /player/inventory/move_item` — Acknowledge an item move.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] when either slot is outside
/// `0..=44`.
#[utoipa::path(
    post,
    path = "/player/inventory/move_item",
    tag = "Inventory",
    summary = "Move an inventory item",
    description = "Validates and acknowledges an item move. The slots are echoed back and not yet dispatched to the bot.",
    request_body = MoveItemRequest,
    responses(
        (status = 200, description = "Move acknowledged", body = serde_json::Value),
        (status = 400, description = "Slot out of range", body = ErrorResponse),
    )
)]
pub async fn move_item(
    Json(req): Json<MoveItemRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if req.from_slot > MAX_WINDOW_SLOT || req.to_slot > MAX_WINDOW_SLOT {
        return Err(GatewayError::InvalidRequest(format!(
            "slots must be between 0 and {MAX_WINDOW_SLOT}"
        )));
    }
    Ok(Json(Ack::with_data("Moving item in inventory", req)))
}

/// Inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/player/inventory/hotbar_select", post(hotbar_select))
        .route("/player/inventory/get", get(get_inventory))
        .route("/player/inventory/move_item", post(move_item))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::routes;
    use crate::api::handlers::test_util::{get, make_state, post_json};

    #[tokio::test]
    async fn hotbar_select_echoes_body() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let body = json!({"slot": 3});
        let (status, response) = post_json(app, "/player/inventory/hotbar_select", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["message"], "Selecting hotbar slot");
        assert_eq!(response["data"], body);
    }

    #[tokio::test]
    async fn hotbar_select_rejects_slot_out_of_range() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let (status, response) =
            post_json(app, "/player/inventory/hotbar_select", &json!({"slot": 9})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], 1001);
    }

    #[tokio::test]
    async fn get_inventory_has_message_only() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let (status, response) = get(app, "/player/inventory/get").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({"message": "Fetching inventory contents"}));
    }

    #[tokio::test]
    async fn move_item_echoes_body() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let body = json!({"from_slot": 36, "to_slot": 9});
        let (status, response) = post_json(app, "/player/inventory/move_item", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["message"], "Moving item in inventory");
        assert_eq!(response["data"], body);
    }

    #[tokio::test]
    async fn move_item_rejects_slot_out_of_range() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let (status, _response) = post_json(
            app,
            "/player/inventory/move_item",
            &json!({"from_slot": 0, "to_slot": 45}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_slot_is_a_type_mismatch() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let (status, _response) =
            post_json(app, "/player/inventory/hotbar_select", &json!({"slot": -1})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
