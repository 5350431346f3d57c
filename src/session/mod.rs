//! Bot session: the long-lived connection to the game server.
//!
//! The session is constructed once at startup by [`connect`] and owned by
//! its background task; everything else holds a [`SessionHandle`]. Events
//! the session observes are published on the [`crate::domain::EventBus`].

pub mod handle;
pub mod runner;
pub mod wire;

pub use handle::{SessionCommand, SessionHandle};
pub use runner::{GREETING, SessionIdentity};

use anyhow::Context;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use crate::config::GatewayConfig;
use crate::domain::EventBus;

/// Capacity of the session command channel.
const COMMAND_CHANNEL_CAPACITY: usize = 32;

/// Connects to the game server and spawns the session task.
///
/// Returns the command handle and the join handle of the session loop.
///
/// # Errors
///
/// Returns an error if the TCP connection to the game server cannot be
/// established. There is no retry; a failed connection at startup is
/// fatal to the process.
pub async fn connect(
    config: &GatewayConfig,
    event_bus: EventBus,
) -> anyhow::Result<(SessionHandle, JoinHandle<()>)> {
    let addr = config.game_server_addr();
    let stream = TcpStream::connect(&addr)
        .await
        .with_context(|| format!("failed to connect to game server at {addr}"))?;

    let identity = SessionIdentity {
        username: config.bot_username.clone(),
        auth_mode: config.bot_auth_mode.clone(),
        server_addr: addr,
    };

    let (handle, commands) = SessionHandle::channel(COMMAND_CHANNEL_CAPACITY);
    let task = tokio::spawn(runner::run_session(stream, identity, event_bus, commands));
    Ok((handle, task))
}
