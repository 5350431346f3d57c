//! Wire protocol spoken with the game server.
//!
//! The dialogue is newline-delimited JSON in both directions. Each line
//! is one tagged object: the server pushes [`ServerEvent`]s, the client
//! writes [`ClientCommand`]s. Unknown or malformed lines are skipped by
//! the session loop, never fatal.

use serde::{Deserialize, Serialize};

use crate::domain::Position;

/// One event pushed by the game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerEvent {
    /// The bot spawned into the world.
    Spawn,
    /// A player joined the server.
    PlayerJoined {
        /// Username of the joining player.
        username: String,
    },
    /// A player left the server.
    PlayerLeft {
        /// Username of the leaving player.
        username: String,
    },
    /// A chat line was spoken in game.
    Chat {
        /// Username of the speaking player.
        username: String,
        /// Chat message text.
        message: String,
    },
}

/// One command written to the game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Presented once, immediately after the connection is established.
    Login {
        /// Username to log in with.
        username: String,
        /// Authentication mode (`"offline"`).
        auth: String,
    },
    /// Say something in chat.
    Chat {
        /// Message text.
        message: String,
    },
    /// Walk to within `radius` blocks of `target`.
    Goto {
        /// Destination in world space.
        target: Position,
        /// Acceptable distance from the destination.
        radius: f64,
    },
}

/// Decodes one line received from the game server.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the line is not a
/// well-formed [`ServerEvent`].
pub fn decode_event(line: &str) -> Result<ServerEvent, serde_json::Error> {
    serde_json::from_str(line)
}

/// Encodes a command as one newline-terminated wire line.
///
/// # Errors
///
/// Returns the underlying `serde_json` error on serialization failure
/// (not expected for any [`ClientCommand`] value).
pub fn encode_line(command: &ClientCommand) -> Result<String, serde_json::Error> {
    let mut line = serde_json::to_string(command)?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn decodes_spawn() {
        let event = decode_event(r#"{"event":"spawn"}"#);
        assert_eq!(event.ok(), Some(ServerEvent::Spawn));
    }

    #[test]
    fn decodes_chat_with_fields() {
        let event = decode_event(r#"{"event":"chat","username":"alex","message":"hi all"}"#);
        let Ok(ServerEvent::Chat { username, message }) = event else {
            panic!("expected chat event");
        };
        assert_eq!(username, "alex");
        assert_eq!(message, "hi all");
    }

    #[test]
    fn rejects_unknown_event() {
        assert!(decode_event(r#"{"event":"teleport"}"#).is_err());
        assert!(decode_event("not json at all").is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(decode_event(r#"{"event":"player_joined"}"#).is_err());
    }

    #[test]
    fn encode_line_is_newline_terminated() {
        let line = encode_line(&ClientCommand::Chat {
            message: "Hello world!".to_string(),
        })
        .unwrap_or_default();
        assert!(line.ends_with('\n'));
        assert!(line.contains(r#""command":"chat""#));
        assert!(line.contains("Hello world!"));
    }

    #[test]
    fn goto_round_trips() {
        let cmd = ClientCommand::Goto {
            target: Position::new(100.0, 64.0, -20.0),
            radius: 2.0,
        };
        let line = encode_line(&cmd).unwrap_or_default();
        let back: Option<ClientCommand> = serde_json::from_str(line.trim_end()).ok();
        assert_eq!(back, Some(cmd));
    }
}
