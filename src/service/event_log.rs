//! Background task writing one log line per bus event.
//!
//! This is the gateway's event log: player joins and leaves, observed
//! chat, and the gateway's own actions all arrive here through the
//! [`EventBus`] and become structured tracing lines.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::domain::{BotEvent, EventBus};

/// Spawns the event log task.
///
/// The subscription is registered before the task is spawned, so events
/// published after this call returns are never missed. A lagged receiver
/// warns and keeps going; the task ends when every bus sender is gone.
pub fn spawn(event_bus: &EventBus) -> JoinHandle<()> {
    let mut rx = event_bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => log_event(&event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(lagged = n, "event log lagged behind event bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        tracing::debug!("event log stopped");
    })
}

fn log_event(event: &BotEvent) {
    match event {
        BotEvent::SessionConnected {
            username,
            server_addr,
            ..
        } => {
            tracing::info!(%username, addr = %server_addr, "session connected");
        }
        BotEvent::Spawned { username, .. } => {
            tracing::info!(%username, "bot spawned");
        }
        BotEvent::PlayerJoined { username, .. } => {
            tracing::info!(%username, "player joined the game");
        }
        BotEvent::PlayerLeft { username, .. } => {
            tracing::info!(%username, "a player left the game");
        }
        BotEvent::ChatReceived {
            username, message, ..
        } => {
            tracing::info!(%username, %message, "chat");
        }
        BotEvent::ChatSent { message, .. } => {
            tracing::debug!(%message, "chat relayed");
        }
        BotEvent::PoiRegistered { name, .. } => {
            tracing::debug!(%name, "poi registered");
        }
    }
}
