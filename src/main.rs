//! golem-gateway server entry point.
//!
//! Connects the bot session to the game server and starts the Axum HTTP
//! server with all REST endpoints.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use golem_gateway::api;
use golem_gateway::app_state::AppState;
use golem_gateway::config::GatewayConfig;
use golem_gateway::domain::{EventBus, PoiRegistry};
use golem_gateway::service::{BotService, event_log};
use golem_gateway::session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting golem-gateway");

    // Build domain layer
    let pois = Arc::new(PoiRegistry::new());
    let event_bus = EventBus::new(config.event_bus_capacity);
    let _event_log = event_log::spawn(&event_bus);

    // Connect the bot session
    let (session_handle, _session_task) = session::connect(&config, event_bus.clone()).await?;

    // Build service layer
    let bot_service = Arc::new(BotService::new(session_handle, pois, event_bus));

    // Build application state
    let app_state = AppState { bot_service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
