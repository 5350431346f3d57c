//! Command handle for the running bot session.
//!
//! [`SessionHandle`] is the only way the rest of the gateway talks to the
//! session: a cloneable sender into the session task's command channel.
//! Tests substitute a handle whose receiving end they hold, which is how
//! the relay layer is exercised without a game server.

use tokio::sync::mpsc;

use crate::domain::Position;
use crate::error::GatewayError;

/// Imperative command accepted by the session task.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Say something in chat.
    Chat(String),
    /// Walk to within `radius` blocks of `target`. Carried by the session
    /// surface but not dispatched by any route.
    Goto {
        /// Destination in world space.
        target: Position,
        /// Acceptable distance from the destination.
        radius: f64,
    },
    /// Close the game connection and end the session task.
    Disconnect,
}

/// Cloneable handle to the bot session's command channel.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionCommand>,
}

impl SessionHandle {
    /// Creates a handle and the receiving end of its command channel.
    ///
    /// The receiver is consumed by the session runner in production and
    /// held directly by tests acting as a fake session.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SessionCommand>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Sends a chat message through the session.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionUnavailable`] if the session task
    /// has terminated.
    pub async fn chat(&self, message: String) -> Result<(), GatewayError> {
        self.tx
            .send(SessionCommand::Chat(message))
            .await
            .map_err(|_| GatewayError::SessionUnavailable)
    }

    /// Asks the session to walk to within `radius` blocks of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionUnavailable`] if the session task
    /// has terminated.
    pub async fn goto(&self, target: Position, radius: f64) -> Result<(), GatewayError> {
        self.tx
            .send(SessionCommand::Goto { target, radius })
            .await
            .map_err(|_| GatewayError::SessionUnavailable)
    }

    /// Asks the session to close the game connection.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SessionUnavailable`] if the session task
    /// has already terminated.
    pub async fn disconnect(&self) -> Result<(), GatewayError> {
        self.tx
            .send(SessionCommand::Disconnect)
            .await
            .map_err(|_| GatewayError::SessionUnavailable)
    }
}
