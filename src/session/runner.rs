//! Bot session event loop.
//!
//! [`run_session`] owns the game connection: it logs in, decodes server
//! lines into [`BotEvent`]s for the bus, and writes queued
//! [`SessionCommand`]s onto the wire. The loop is generic over the
//! transport so tests drive it through an in-memory duplex pipe.

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use super::handle::SessionCommand;
use super::wire::{self, ClientCommand, ServerEvent};
use crate::domain::{BotEvent, EventBus};

/// Fixed chat greeting, sent exactly once per process lifetime on the
/// first spawn.
pub const GREETING: &str = "Hello world!";

/// Identity the session presents to the game server.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    /// Username presented at login.
    pub username: String,
    /// Authentication mode string (`"offline"`).
    pub auth_mode: String,
    /// Address of the game server, carried on events and log lines.
    pub server_addr: String,
}

/// Runs the session loop over an established transport.
///
/// Publishes a [`BotEvent`] for everything the server reports and sends
/// the greeting on the first spawn only. Returns when the server closes
/// the connection, the command channel closes, or a
/// [`SessionCommand::Disconnect`] arrives. Malformed server lines are
/// skipped with a warning.
pub async fn run_session<S>(
    transport: S,
    identity: SessionIdentity,
    event_bus: EventBus,
    mut commands: mpsc::Receiver<SessionCommand>,
) where
    S: AsyncRead + AsyncWrite + Send,
{
    let (read_half, mut write_half) = tokio::io::split(transport);
    let mut lines = BufReader::new(read_half).lines();

    event_bus.publish(BotEvent::SessionConnected {
        username: identity.username.clone(),
        server_addr: identity.server_addr.clone(),
        timestamp: Utc::now(),
    });
    tracing::info!(
        username = %identity.username,
        addr = %identity.server_addr,
        "bot session connected"
    );

    let login = ClientCommand::Login {
        username: identity.username.clone(),
        auth: identity.auth_mode.clone(),
    };
    if let Err(error) = write_command(&mut write_half, &login).await {
        tracing::warn!(%error, "failed to send login, closing session");
        return;
    }

    let mut greeted = false;

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let event = match wire::decode_event(&line) {
                        Ok(event) => event,
                        Err(error) => {
                            tracing::warn!(%error, "skipping malformed server line");
                            continue;
                        }
                    };
                    match event {
                        ServerEvent::Spawn => {
                            event_bus.publish(BotEvent::Spawned {
                                username: identity.username.clone(),
                                timestamp: Utc::now(),
                            });
                            if !greeted {
                                greeted = true;
                                let hello = ClientCommand::Chat {
                                    message: GREETING.to_string(),
                                };
                                if let Err(error) = write_command(&mut write_half, &hello).await {
                                    tracing::warn!(%error, "failed to send greeting");
                                    break;
                                }
                            }
                        }
                        ServerEvent::PlayerJoined { username } => {
                            event_bus.publish(BotEvent::PlayerJoined {
                                username,
                                timestamp: Utc::now(),
                            });
                        }
                        ServerEvent::PlayerLeft { username } => {
                            event_bus.publish(BotEvent::PlayerLeft {
                                username,
                                timestamp: Utc::now(),
                            });
                        }
                        ServerEvent::Chat { username, message } => {
                            event_bus.publish(BotEvent::ChatReceived {
                                username,
                                message,
                                timestamp: Utc::now(),
                            });
                        }
                    }
                }
                Ok(None) => {
                    tracing::info!("game server closed the connection");
                    break;
                }
                Err(error) => {
                    tracing::warn!(%error, "read error on game connection");
                    break;
                }
            },
            command = commands.recv() => {
                let outbound = match command {
                    Some(SessionCommand::Chat(message)) => ClientCommand::Chat { message },
                    Some(SessionCommand::Goto { target, radius }) => {
                        ClientCommand::Goto { target, radius }
                    }
                    Some(SessionCommand::Disconnect) | None => break,
                };
                if let Err(error) = write_command(&mut write_half, &outbound).await {
                    tracing::warn!(%error, "failed to write command to game connection");
                    break;
                }
            },
        }
    }

    tracing::debug!("session loop ended");
}

/// Writes one newline-terminated command to the game connection.
async fn write_command<W>(writer: &mut W, command: &ClientCommand) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = wire::encode_line(command).map_err(std::io::Error::other)?;
    writer.write_all(line.as_bytes()).await
}
