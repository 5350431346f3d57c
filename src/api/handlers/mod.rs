//! REST endpoint handlers organized by resource.

pub mod action;
pub mod inventory;
pub mod nav;
pub mod system;
pub mod world;

use axum::Router;

use crate::app_state::AppState;

/// Composes all player and world routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(nav::routes())
        .merge(action::routes())
        .merge(inventory::routes())
        .merge(world::routes())
}
