//! Full sessions over loopback TCP

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use connect_four::adapter::{
    accept_participants, bind, relay, LineTransport, ServerConfig, Transport, TransportError,
};
use connect_four::core::{BoardSize, Game};
use connect_four::engine::{AbortReason, Outcome, TurnDispatcher};
use connect_four::types::{Mode, Player};

/// Console or terminal double: scripted input, captured output
struct Terminal {
    keys: VecDeque<&'static str>,
    screen: String,
}

impl Terminal {
    fn new(keys: &[&'static str]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            screen: String::new(),
        }
    }
}

#[async_trait]
impl Transport for Terminal {
    async fn read_line(&mut self) -> Result<String, TransportError> {
        self.keys
            .pop_front()
            .map(str::to_string)
            .ok_or(TransportError::Closed)
    }

    async fn send(&mut self, text: &str) -> Result<(), TransportError> {
        self.screen.push_str(text);
        Ok(())
    }

    fn label(&self) -> &str {
        "terminal"
    }
}

fn loopback() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

async fn read_all(stream: &mut TcpStream) -> String {
    let mut buf = String::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_string(&mut buf))
        .await
        .expect("timeout waiting for server to close")
        .expect("io error");
    buf
}

#[tokio::test]
async fn client_vs_client_game_over_tcp() {
    let listener = bind(&loopback()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let mut console = Terminal::new(&[]);
        let remotes = accept_participants(&listener, Mode::ClientVsClient, &mut console)
            .await
            .unwrap();
        let game = Game::new(BoardSize::new(6, 7).unwrap());
        let mut dispatcher =
            TurnDispatcher::new(game, Mode::ClientVsClient, Box::new(console), remotes).unwrap();
        dispatcher.run().await
    });

    // Accept order decides seating: the first connection is player one.
    let mut one = TcpStream::connect(addr).await.unwrap();
    one.write_all(b"1\n1\n1\n1\n").await.unwrap();
    let two = TcpStream::connect(addr).await.unwrap();

    let mut two = LineTransport::from_tcp(two).unwrap();
    let mut terminal = Terminal::new(&["2", "2", "2"]);
    let relayed = tokio::time::timeout(Duration::from_secs(5), relay(&mut two, &mut terminal))
        .await
        .expect("timeout relaying player two");
    relayed.unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("timeout waiting for game")
        .unwrap();
    assert_eq!(outcome, Outcome::Win(Player::One));

    let seen_by_one = read_all(&mut one).await;
    assert_eq!(seen_by_one.matches("Your turn (Player 1)").count(), 4);
    assert!(seen_by_one.contains("Player 2 is making a move...\n"));
    assert!(seen_by_one.ends_with("Player 1 wins!\n"));

    assert_eq!(terminal.screen.matches("Your turn (Player 2)").count(), 3);
    assert!(terminal.screen.contains("Player 1 wins!\n"));
    assert!(terminal.screen.ends_with("Connection closed by server.\n"));
}

#[tokio::test]
async fn server_vs_client_announces_connection_phase() {
    let listener = bind(&loopback()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let mut console = Terminal::new(&[]);
        let remotes = accept_participants(&listener, Mode::ServerVsClient, &mut console)
            .await
            .unwrap();
        (console.screen, remotes.len())
    });

    let _client = TcpStream::connect(addr).await.unwrap();
    let (screen, count) = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("timeout accepting")
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        screen,
        "Waiting for Player 2 to connect...\n\
         Player 2 connected\n\
         All players connected. Starting the game!\n"
    );
}

#[tokio::test]
async fn disconnect_mid_game_ends_session_for_everyone() {
    let listener = bind(&loopback()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let mut console = Terminal::new(&["4"]);
        let remotes = accept_participants(&listener, Mode::ServerVsClient, &mut console)
            .await
            .unwrap();
        let game = Game::new(BoardSize::default());
        let mut dispatcher =
            TurnDispatcher::new(game, Mode::ServerVsClient, Box::new(console), remotes).unwrap();
        dispatcher.run().await
    });

    // Player two hangs up without answering.
    let client = TcpStream::connect(addr).await.unwrap();
    drop(client);

    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("timeout waiting for abort")
        .unwrap();
    // Depending on timing the hang-up surfaces as EOF or as a reset.
    assert!(
        matches!(
            outcome,
            Outcome::Aborted(
                AbortReason::Disconnected(Player::Two)
                    | AbortReason::ReadFailed {
                        player: Player::Two,
                        ..
                    }
            )
        ),
        "unexpected outcome {:?}",
        outcome
    );
}
