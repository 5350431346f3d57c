//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::BotService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Bot service wrapping the session handle, POI registry, and bus.
    pub bot_service: Arc<BotService>,
}
