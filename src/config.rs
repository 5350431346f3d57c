//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Defaults mirror the values the bot
//! has historically shipped with: HTTP on port 3000, game server on
//! `localhost:25565`, username `Bot`, offline authentication.

use std::net::SocketAddr;

use anyhow::Context;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Host of the game server the bot session connects to.
    pub game_server_host: String,

    /// Port of the game server.
    pub game_server_port: u16,

    /// Username the bot presents at login.
    pub bot_username: String,

    /// Authentication mode string (the bot only supports `offline`).
    pub bot_auth_mode: String,

    /// Capacity of the EventBus broadcast channel.
    pub event_bus_capacity: usize,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let game_server_host =
            std::env::var("GAME_SERVER_HOST").unwrap_or_else(|_| "localhost".to_string());
        let game_server_port = parse_env("GAME_SERVER_PORT", 25565);

        let bot_username = std::env::var("BOT_USERNAME").unwrap_or_else(|_| "Bot".to_string());
        let bot_auth_mode =
            std::env::var("BOT_AUTH_MODE").unwrap_or_else(|_| "offline".to_string());

        let event_bus_capacity = parse_env("EVENT_BUS_CAPACITY", 1024);

        Ok(Self {
            listen_addr,
            game_server_host,
            game_server_port,
            bot_username,
            bot_auth_mode,
            event_bus_capacity,
        })
    }

    /// Returns the `host:port` address of the game server.
    #[must_use]
    pub fn game_server_addr(&self) -> String {
        format!("{}:{}", self.game_server_host, self.game_server_port)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
