//! Bot service: orchestrates session commands and emits events.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{BotEvent, EventBus, Poi, PoiId, PoiRegistry, Position};
use crate::error::GatewayError;
use crate::session::SessionHandle;

/// Orchestration layer between the REST handlers and the bot session.
///
/// Stateless coordinator: owns the [`SessionHandle`] for outbound
/// commands, the [`PoiRegistry`] for world markers, and the [`EventBus`]
/// for event emission. Every action follows the pattern: dispatch →
/// emit event → log.
#[derive(Debug, Clone)]
pub struct BotService {
    session: SessionHandle,
    pois: Arc<PoiRegistry>,
    event_bus: EventBus,
}

impl BotService {
    /// Creates a new `BotService`.
    #[must_use]
    pub fn new(session: SessionHandle, pois: Arc<PoiRegistry>, event_bus: EventBus) -> Self {
        Self {
            session,
            pois,
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the inner [`PoiRegistry`].
    #[must_use]
    pub fn pois(&self) -> &Arc<PoiRegistry> {
        &self.pois
    }

    /// Relays a chat message through the bot session.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionUnavailable`] if the session task
    /// has terminated.
    pub async fn say(&self, message: String) -> Result<(), GatewayError> {
        self.session.chat(message.clone()).await?;

        let _ = self.event_bus.publish(BotEvent::ChatSent {
            message: message.clone(),
            timestamp: Utc::now(),
        });

        tracing::info!(%message, "chat relayed to session");
        Ok(())
    }

    /// Registers a named point of interest.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] on an empty name and
    /// [`GatewayError::DuplicatePoi`] if the name is already taken.
    pub async fn register_poi(
        &self,
        name: String,
        position: Position,
    ) -> Result<PoiId, GatewayError> {
        if name.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "poi name must not be empty".to_string(),
            ));
        }

        let poi = Poi::new(name.clone(), position);
        let poi_id = self.pois.insert(poi).await?;

        let _ = self.event_bus.publish(BotEvent::PoiRegistered {
            poi_id,
            name: name.clone(),
            timestamp: Utc::now(),
        });

        tracing::info!(%poi_id, %name, %position, "point of interest registered");
        Ok(poi_id)
    }

    /// Returns all registered POIs sorted by name.
    pub async fn list_pois(&self) -> Vec<Poi> {
        self.pois.list().await
    }
}
