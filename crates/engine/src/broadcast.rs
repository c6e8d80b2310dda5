//! Fan-out of board state and notices to every connected seat.
//!
//! Writes are best-effort: a failed write to a participant that is not on
//! turn is logged and otherwise ignored. A broken connection surfaces when
//! that participant's own read fails on their next turn.

use arrayvec::ArrayVec;
use tracing::warn;

use crate::adapter::protocol::{turn_prompt, turn_prompt_line, waiting_notice};
use crate::adapter::{Transport, TransportError};
use crate::core::Board;
use crate::source::notification_targets;
use crate::types::{Mode, Player, Seat};

/// Owner of the local display channel and every remote transport
pub struct Broadcaster {
    console: Box<dyn Transport>,
    remotes: Vec<Box<dyn Transport>>,
    targets: ArrayVec<Seat, 3>,
}

async fn send_logged(transport: &mut dyn Transport, text: &str) {
    if let Err(err) = transport.send(text).await {
        warn!(peer = transport.label(), %err, "write failed");
    }
}

impl Broadcaster {
    /// `remotes` are expected in seat order for `mode`
    pub fn new(
        mode: Mode,
        console: Box<dyn Transport>,
        remotes: Vec<Box<dyn Transport>>,
    ) -> Self {
        Self {
            console,
            remotes,
            targets: notification_targets(mode),
        }
    }

    /// The channel serving `seat`. The computer has no channel of its own;
    /// its messages go to the local display.
    fn channel(&mut self, seat: Seat) -> Option<&mut (dyn Transport + 'static)> {
        match seat {
            Seat::Console | Seat::Computer => Some(self.console.as_mut()),
            Seat::Remote(index) => self.remotes.get_mut(index).map(|t| t.as_mut()),
        }
    }

    /// Deliver `text` to one seat only
    pub async fn send_to(&mut self, seat: Seat, text: &str) {
        match self.channel(seat) {
            Some(transport) => send_logged(transport, text).await,
            None => warn!(?seat, "no channel for seat"),
        }
    }

    /// Read one line from the seat on turn
    pub async fn read_from(&mut self, seat: Seat) -> Result<String, TransportError> {
        match self.channel(seat) {
            Some(transport) => transport.read_line().await,
            None => Err(TransportError::Closed),
        }
    }

    /// Deliver `text` to every notification target
    pub async fn broadcast(&mut self, text: &str) {
        for seat in self.targets.clone() {
            self.send_to(seat, text).await;
        }
    }

    /// Render the board to every notification target
    pub async fn show_board(&mut self, board: &Board) {
        for seat in self.targets.clone() {
            let Some(transport) = self.channel(seat) else {
                continue;
            };
            if let Err(err) = transport.send_board(board).await {
                warn!(peer = transport.label(), %err, "board write failed");
            }
        }
    }

    /// Tell the acting seat it is on turn and everyone else who is moving.
    ///
    /// The local display only gets a waiting notice while a remote
    /// participant is on turn; the computer's pick is announced separately.
    pub async fn announce_turn(&mut self, player: Player, acting: Seat, columns: usize) {
        for seat in self.targets.clone() {
            let text = match (seat, acting) {
                (Seat::Console, Seat::Console) => turn_prompt(player, columns),
                (Seat::Console, Seat::Computer) => continue,
                (seat, acting) if seat == acting => turn_prompt_line(player, columns),
                _ => waiting_notice(player),
            };
            self.send_to(seat, &text).await;
        }
    }

    /// Shut down every remote transport
    pub async fn close_all(&mut self) {
        for remote in &mut self.remotes {
            if let Err(err) = remote.close().await {
                warn!(peer = remote.label(), %err, "close failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    struct Recorder {
        output: Arc<Mutex<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn read_line(&mut self) -> Result<String, TransportError> {
            Err(TransportError::Closed)
        }

        async fn send(&mut self, text: &str) -> Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::Closed);
            }
            self.output.lock().unwrap().push_str(text);
            Ok(())
        }

        fn label(&self) -> &str {
            "recorder"
        }
    }

    fn recorder(fail: bool) -> (Box<dyn Transport>, Arc<Mutex<String>>) {
        let output = Arc::new(Mutex::new(String::new()));
        let transport = Recorder {
            output: Arc::clone(&output),
            fail,
        };
        (Box::new(transport), output)
    }

    #[tokio::test]
    async fn test_turn_announcements_follow_seats() {
        let (console, console_out) = recorder(false);
        let (one, one_out) = recorder(false);
        let (two, two_out) = recorder(false);
        let mut broadcaster = Broadcaster::new(Mode::ClientVsClient, console, vec![one, two]);

        broadcaster.announce_turn(Player::Two, Seat::Remote(1), 7).await;

        let waiting = "Player 2 is making a move...\n";
        assert_eq!(*console_out.lock().unwrap(), waiting);
        assert_eq!(*one_out.lock().unwrap(), waiting);
        assert_eq!(
            *two_out.lock().unwrap(),
            "Your turn (Player 2). Enter column (1-7): \n"
        );
    }

    #[tokio::test]
    async fn test_computer_turn_leaves_console_quiet() {
        let (console, console_out) = recorder(false);
        let mut broadcaster = Broadcaster::new(Mode::ServerVsComputer, console, vec![]);

        broadcaster.announce_turn(Player::Two, Seat::Computer, 7).await;
        assert!(console_out.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_does_not_stop_broadcast() {
        let (console, console_out) = recorder(false);
        let (broken, _) = recorder(true);
        let (healthy, healthy_out) = recorder(false);
        let mut broadcaster =
            Broadcaster::new(Mode::ClientVsClient, console, vec![broken, healthy]);

        broadcaster.broadcast("hello\n").await;
        assert_eq!(*console_out.lock().unwrap(), "hello\n");
        assert_eq!(*healthy_out.lock().unwrap(), "hello\n");
    }

    #[tokio::test]
    async fn test_missing_seat_reads_as_closed() {
        let (console, _) = recorder(false);
        let mut broadcaster = Broadcaster::new(Mode::ServerVsComputer, console, vec![]);
        assert!(matches!(
            broadcaster.read_from(Seat::Remote(0)).await,
            Err(TransportError::Closed)
        ));
    }
}
