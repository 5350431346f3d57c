//! Domain events reflecting what the bot session observes and does.
//!
//! Every session observation and every outbound action publishes a
//! [`BotEvent`] through the [`super::EventBus`]. The event log task
//! subscribes and writes one line per event.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PoiId;

/// Domain event emitted by the session and the service layer.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum BotEvent {
    /// Emitted once when the session connection is established.
    SessionConnected {
        /// Username the bot logged in with.
        username: String,
        /// Address of the game server.
        server_addr: String,
        /// Connection timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when the bot spawns into the world.
    Spawned {
        /// Username of the bot.
        username: String,
        /// Spawn timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted for every player that joins the server.
    PlayerJoined {
        /// Username of the joining player.
        username: String,
        /// Join timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted for every player that leaves the server.
    PlayerLeft {
        /// Username of the leaving player.
        username: String,
        /// Leave timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted for every chat line observed in game.
    ChatReceived {
        /// Username of the speaking player.
        username: String,
        /// Chat message text.
        message: String,
        /// Observation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after the gateway relays a chat message to the session.
    ChatSent {
        /// Message text handed to the session.
        message: String,
        /// Relay timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a point of interest is registered.
    PoiRegistered {
        /// Identifier of the new POI.
        poi_id: PoiId,
        /// Name of the new POI.
        name: String,
        /// Registration timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl BotEvent {
    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::SessionConnected { .. } => "session_connected",
            Self::Spawned { .. } => "spawned",
            Self::PlayerJoined { .. } => "player_joined",
            Self::PlayerLeft { .. } => "player_left",
            Self::ChatReceived { .. } => "chat_received",
            Self::ChatSent { .. } => "chat_sent",
            Self::PoiRegistered { .. } => "poi_registered",
        }
    }

    /// Returns the timestamp carried by this event.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::SessionConnected { timestamp, .. }
            | Self::Spawned { timestamp, .. }
            | Self::PlayerJoined { timestamp, .. }
            | Self::PlayerLeft { timestamp, .. }
            | Self::ChatReceived { timestamp, .. }
            | Self::ChatSent { timestamp, .. }
            | Self::PoiRegistered { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn player_joined_event_type() {
        let event = BotEvent::PlayerJoined {
            username: "steve".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type_str(), "player_joined");
    }

    #[test]
    fn chat_received_serializes_tagged() {
        let event = BotEvent::ChatReceived {
            username: "alex".to_string(),
            message: "hello there".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("\"event_type\":\"chat_received\""));
        assert!(json.contains("hello there"));
    }

    #[test]
    fn timestamp_accessor_matches_field() {
        let ts = Utc::now();
        let event = BotEvent::ChatSent {
            message: "hi".to_string(),
            timestamp: ts,
        };
        assert_eq!(event.timestamp(), ts);
    }
}
