//! Game server and operator console (default binary).
//!
//! Flow: probe the port, pick board size and mode (menus unless given as
//! flags), accept the remote participants the mode needs, then hand every
//! channel to the turn dispatcher until the game ends.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use connect_four::adapter::{self, ServerConfig, Transport};
use connect_four::core::{BoardSize, Game};
use connect_four::engine::{ComputerOpponent, Outcome, TurnDispatcher};
use connect_four::term::{select_board_size, select_mode, warn_if_wide, BoardStyle, Console};
use connect_four::types::Mode;

#[derive(Parser, Debug)]
#[command(name = "connect-four-server")]
#[command(about = "Host a game of connect four", long_about = None)]
#[command(version)]
struct Args {
    /// Address to listen on [default: $CONNECT_FOUR_HOST or 0.0.0.0]
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on [default: $CONNECT_FOUR_PORT or 8000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of rows (skips the board size menu)
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns (skips the board size menu)
    #[arg(long)]
    columns: Option<usize>,

    /// Game mode, e.g. server-vs-client (skips the mode menu)
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<Mode>,

    /// Seed for the computer opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the local board without colours
    #[arg(long)]
    no_color: bool,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = Mode::ALL.iter().map(|m| m.as_str()).collect();
        format!("unknown mode {s:?} (expected one of {})", known.join(", "))
    })
}

impl Args {
    fn config(&self) -> ServerConfig {
        ServerConfig::from_env().with_overrides(self.host.clone(), self.port)
    }

    /// Board size from the flags, if either dimension was given
    fn board_size(&self) -> Result<Option<BoardSize>> {
        if self.rows.is_none() && self.columns.is_none() {
            return Ok(None);
        }
        let default = BoardSize::default();
        let size = BoardSize::new(
            self.rows.unwrap_or(default.rows()),
            self.columns.unwrap_or(default.columns()),
        )?;
        Ok(Some(size))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    connect_four::init_tracing();
    let args = Args::parse();
    let config = args.config();

    // A mode given on the command line may not need the socket at all.
    if args.mode.map_or(true, Mode::is_networked) {
        adapter::check_tcp_listen_available(&config.host, config.port).with_context(|| {
            format!("port {} on {} is not available", config.port, config.host)
        })?;
    }

    let style = if args.no_color {
        BoardStyle::Plain
    } else {
        BoardStyle::Colored
    };
    let mut console = Console::stdio(style);

    let size = match args.board_size()? {
        Some(size) => {
            warn_if_wide(&mut console, size).await?;
            size
        }
        None => select_board_size(&mut console)
            .await
            .context("board size selection aborted")?,
    };
    let mode = match args.mode {
        Some(mode) => mode,
        None => select_mode(&mut console)
            .await
            .context("mode selection aborted")?,
    };
    info!(%mode, rows = size.rows(), columns = size.columns(), "session configured");

    let remotes = if mode.is_networked() {
        let listener = adapter::bind(&config)
            .await
            .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
        let port = listener.local_addr()?.port();
        console.send(&format!("Server started on port {port}\n")).await?;
        adapter::accept_participants(&listener, mode, &mut console)
            .await
            .context("failed to accept participants")?
    } else {
        Vec::new()
    };

    let mut dispatcher = TurnDispatcher::new(Game::new(size), mode, Box::new(console), remotes)?;
    if let Some(seed) = args.seed {
        dispatcher = dispatcher.with_computer(ComputerOpponent::seeded(seed));
    }

    match dispatcher.run().await {
        Outcome::Aborted(reason) => bail!("game aborted: {reason}"),
        Outcome::Win(_) | Outcome::Draw => Ok(()),
    }
}
