//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root, on the paths the bot's HTTP
//! interface has always used.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::build_router;
    use crate::api::handlers::test_util::{get, make_state, post_json};

    #[tokio::test]
    async fn full_router_serves_every_route_group() {
        let (state, _commands) = make_state();
        let app = build_router().with_state(state);

        let (health, _) = get(app.clone(), "/health").await;
        assert_eq!(health, StatusCode::OK);

        let (nav, _) = post_json(
            app.clone(),
            "/player/nav/goto",
            &json!({"radius": 1.0, "target": {"x": 0.0, "y": 64.0, "z": 0.0}}),
        )
        .await;
        assert_eq!(nav, StatusCode::OK);

        let (say, _) = post_json(app.clone(), "/player/action/say", &json!({"value": "hi"})).await;
        assert_eq!(say, StatusCode::OK);

        let (inventory, _) = get(app.clone(), "/player/inventory/get").await;
        assert_eq!(inventory, StatusCode::OK);

        let (world, _) = get(app, "/world/get_entities").await;
        assert_eq!(world, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (state, _commands) = make_state();
        let app = build_router().with_state(state);

        let (status, _) = get(app, "/player/teleport").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
