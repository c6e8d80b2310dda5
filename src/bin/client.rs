//! Remote participant client.
//!
//! Connects to a game server and relays between the connection and the
//! terminal. All game logic stays on the server.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpStream;
use tracing::info;

use connect_four::adapter::{relay, LineTransport, ServerConfig};
use connect_four::term::{BoardStyle, Console};
use connect_four::types::DEFAULT_PORT;

#[derive(Parser, Debug)]
#[command(name = "connect-four-client")]
#[command(about = "Join a game of connect four", long_about = None)]
#[command(version)]
struct Args {
    /// Server host [default: $CONNECT_FOUR_HOST or 127.0.0.1]
    #[arg(long)]
    host: Option<String>,

    /// Server port [default: $CONNECT_FOUR_PORT or 8000]
    #[arg(short, long)]
    port: Option<u16>,
}

impl Args {
    fn config(self) -> ServerConfig {
        let defaults = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        };
        ServerConfig::from_env_or(defaults).with_overrides(self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    connect_four::init_tracing();
    let config = Args::parse().config();

    let stream = TcpStream::connect((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to connect to {}:{}", config.host, config.port))?;
    info!(host = %config.host, port = config.port, "connected to server");

    let mut server = LineTransport::from_tcp(stream).context("failed to set up connection")?;
    let mut local = Console::stdio(BoardStyle::Plain);
    relay(&mut server, &mut local)
        .await
        .context("connection to server failed")?;
    Ok(())
}
