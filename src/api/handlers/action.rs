//! Action handlers: attack, punch, say, interact.
//!
//! `say` is the one route wired to the session; the rest acknowledge and
//! echo.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{
    Ack, AttackRequest, InteractBlockRequest, InteractEntityRequest, PunchRequest, SayRequest,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /player/action/attack` — Acknowledge an attack target.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on an empty target.
#[utoipa::path(
    post,
    path = "/player/action/attack",
    tag = "Actions",
    summary = "Attack a target",
    description = "Validates and acknowledges an attack target. The target is echoed back and not yet dispatched to the bot.",
    request_body = AttackRequest,
    responses(
        (status = 200, description = "Target acknowledged", body = serde_json::Value),
        (status = 400, description = "Invalid target", body = ErrorResponse),
    )
)]
pub async fn attack(Json(req): Json<AttackRequest>) -> Result<impl IntoResponse, GatewayError> {
    if req.target.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "target must not be empty".to_string(),
        ));
    }
    Ok(Json(Ack::with_data("Attacking target", req)))
}

/// `POST /player/action/punch` — Acknowledge a punch target.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on an empty target.
#[utoipa::path(
    post,
    path = "/player/action/punch",
    tag = "Actions",
    summary = "Punch a target",
    description = "Validates and acknowledges a punch target. The target is echoed back and not yet dispatched to the bot.",
    request_body = PunchRequest,
    responses(
        (status = 200, description = "Target acknowledged", body = serde_json::Value),
        (status = 400, description = "Invalid target", body = ErrorResponse),
    )
)]
pub async fn punch(Json(req): Json<PunchRequest>) -> Result<impl IntoResponse, GatewayError> {
    if req.target.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "target must not be empty".to_string(),
        ));
    }
    Ok(Json(Ack::with_data("Punching target", req)))
}

/// `POST /player/action/say` — Relay a chat message through the bot.
///
/// # Errors
///
/// Returns [`GatewayError::SessionUnavailable`] if the session task has
/// terminated.
#[utoipa::path(
    post,
    path = "/player/action/say",
    tag = "Actions",
    summary = "Say something in chat",
    description = "Forwards the message to the bot session and confirms what was said.",
    request_body = SayRequest,
    responses(
        (status = 200, description = "Message relayed", body = serde_json::Value),
        (status = 503, description = "Session unavailable", body = ErrorResponse),
    )
)]
pub async fn say(
    State(state): State<AppState>,
    Json(req): Json<SayRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    state.bot_service.say(req.value.clone()).await?;
    Ok(Json(Ack::message_only(&format!("Saying: {}", req.value))))
}

/// `POST /player/action/interact_block` — Acknowledge a block interaction.
///
/// # Errors
///
/// Never fails once the body deserializes.
#[utoipa::path(
    post,
    path = "/player/action/interact_block",
    tag = "Actions",
    summary = "Interact with a block",
    description = "Validates and acknowledges a block interaction. The position is echoed back and not yet dispatched to the bot.",
    request_body = InteractBlockRequest,
    responses(
        (status = 200, description = "Interaction acknowledged", body = serde_json::Value),
    )
)]
pub async fn interact_block(
    Json(req): Json<InteractBlockRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(Ack::with_data("Interacting with block", req)))
}

/// `POST /player/action/interact_entity` — Acknowledge an entity interaction.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] on an empty target.
#[utoipa::path(
    post,
    path = "/player/action/interact_entity",
    tag = "Actions",
    summary = "Interact with an entity",
    description = "Validates and acknowledges an entity interaction. The target is echoed back and not yet dispatched to the bot.",
    request_body = InteractEntityRequest,
    responses(
        (status = 200, description = "Interaction acknowledged", body = serde_json::Value),
        (status = 400, description = "Invalid target", body = ErrorResponse),
    )
)]
pub async fn interact_entity(
    Json(req): Json<InteractEntityRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if req.target.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "target must not be empty".to_string(),
        ));
    }
    Ok(Json(Ack::with_data("Interacting with entity", req)))
}

/// Action routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/player/action/attack", post(attack))
        .route("/player/action/punch", post(punch))
        .route("/player/action/say", post(say))
        .route("/player/action/interact_block", post(interact_block))
        .route("/player/action/interact_entity", post(interact_entity))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::routes;
    use crate::api::handlers::test_util::{make_state, post_json};
    use crate::session::SessionCommand;

    #[tokio::test]
    async fn say_relays_exactly_one_chat_command() {
        let (state, mut commands) = make_state();
        let app = routes().with_state(state);

        let (status, response) =
            post_json(app, "/player/action/say", &json!({"value": "hi"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response, json!({"message": "Saying: hi"}));

        assert_eq!(
            commands.try_recv().ok(),
            Some(SessionCommand::Chat("hi".to_string()))
        );
        assert!(commands.try_recv().is_err());
    }

    #[tokio::test]
    async fn say_with_dead_session_returns_503() {
        let (state, commands) = make_state();
        drop(commands);
        let app = routes().with_state(state);

        let (status, response) =
            post_json(app, "/player/action/say", &json!({"value": "hi"})).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response["error"]["code"], 3002);
    }

    #[tokio::test]
    async fn attack_echoes_body() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let body = json!({"target": "zombie"});
        let (status, response) = post_json(app, "/player/action/attack", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["message"], "Attacking target");
        assert_eq!(response["data"], body);
    }

    #[tokio::test]
    async fn punch_rejects_empty_target() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let (status, response) =
            post_json(app, "/player/action/punch", &json!({"target": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], 1001);
    }

    #[tokio::test]
    async fn interact_block_echoes_body() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let body = json!({"position": {"x": 10.0, "y": 64.0, "z": -3.0}});
        let (status, response) = post_json(app, "/player/action/interact_block", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["message"], "Interacting with block");
        assert_eq!(response["data"], body);
    }

    #[tokio::test]
    async fn interact_entity_echoes_body() {
        let (state, _commands) = make_state();
        let app = routes().with_state(state);

        let body = json!({"target": "villager"});
        let (status, response) = post_json(app, "/player/action/interact_entity", &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["message"], "Interacting with entity");
        assert_eq!(response["data"], body);
    }
}
