//! TCP server for remote participants
//!
//! Binds the listening socket and accepts exactly as many participants as the
//! selected mode needs. Connection acceptance ends before play begins; the
//! turn dispatcher receives a fixed, ordered list of transports.

use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use connect_four_types::{Mode, DEFAULT_PORT};

use crate::transport::{LineTransport, Transport, TransportError};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Like [`ServerConfig::from_env`] with caller-chosen fallbacks
    pub fn from_env_or(defaults: Self) -> Self {
        Self::from_vars(defaults, |key| std::env::var(key).ok())
    }

    fn from_vars(defaults: Self, var: impl Fn(&str) -> Option<String>) -> Self {
        let host = var("CONNECT_FOUR_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);
        let port = match var("CONNECT_FOUR_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unparsable CONNECT_FOUR_PORT");
                defaults.port
            }),
            None => defaults.port,
        };

        Self { host, port }
    }

    /// Apply command line overrides on top of this configuration
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

/// Fail early with `AddrInUse` (or a resolution error) if the port is taken.
///
/// The probe listener is dropped immediately.
pub fn check_tcp_listen_available(host: &str, port: u16) -> io::Result<()> {
    let listener = std::net::TcpListener::bind((host, port))?;
    drop(listener);
    Ok(())
}

/// Bind the game server socket
pub async fn bind(config: &ServerConfig) -> io::Result<TcpListener> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "game server listening");
    Ok(listener)
}

/// Write a best-effort status line to the local display
async fn announce(display: &mut dyn Transport, text: &str) {
    if let Err(err) = display.send(text).await {
        warn!(%err, "failed to write to local display");
    }
}

/// Accept the participants `mode` requires, in seat order.
///
/// Progress messages ("Waiting for Player N to connect...") go to the local
/// display. Returns an empty list for modes without remote seats.
pub async fn accept_participants(
    listener: &TcpListener,
    mode: Mode,
    display: &mut dyn Transport,
) -> Result<Vec<Box<dyn Transport>>, TransportError> {
    let expected = mode.remote_count();
    let mut transports: Vec<Box<dyn Transport>> = Vec::with_capacity(expected);

    for index in 0..expected {
        let player = mode
            .remote_player(index)
            .map(|p| p.to_string())
            .unwrap_or_else(|| format!("Participant {}", index + 1));

        announce(display, &format!("Waiting for {player} to connect...\n")).await;
        let (stream, addr): (_, SocketAddr) = listener.accept().await?;
        info!(%addr, %player, "participant connected");
        announce(display, &format!("{player} connected\n")).await;

        transports.push(Box::new(LineTransport::from_tcp(stream)?));
    }

    if expected > 0 {
        announce(display, "All players connected. Starting the game!\n").await;
    }
    Ok(transports)
}
