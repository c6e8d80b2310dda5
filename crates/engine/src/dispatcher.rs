//! Turn dispatcher - the per-session state machine.
//!
//! ```text
//!            +------------------- rejected input ------------------+
//!            v                                                     |
//! AwaitingMove(player) --column--> Applying { player, column } ----+
//!            |                             |
//!            | read failure                | win / draw
//!            v                             v
//!   Finished(Aborted(reason))      Finished(Win | Draw)
//! ```
//!
//! Exactly one participant is read at a time: the seat of the player on turn.
//! Every accepted move is rendered to all seats before the outcome check.

use std::fmt;

use tracing::{debug, info, warn};

use crate::adapter::protocol::{
    computer_choice, move_error_notice, win_announcement, DRAW_ANNOUNCEMENT, GAME_ENDED_BY_ERROR,
};
use crate::adapter::{Transport, TransportError};
use crate::broadcast::Broadcaster;
use crate::core::{parse_column, Game, GameOutcome, SetupError};
use crate::source::ComputerOpponent;
use crate::types::{Mode, Player, Seat};

/// Why a session ended without a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The seat on turn reached end of stream
    Disconnected(Player),
    /// Reading from the seat on turn failed
    ReadFailed { player: Player, message: String },
}

impl AbortReason {
    fn from_transport(player: Player, err: TransportError) -> Self {
        match err {
            TransportError::Closed => AbortReason::Disconnected(player),
            TransportError::Io(err) => AbortReason::ReadFailed {
                player,
                message: err.to_string(),
            },
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Disconnected(player) => write!(f, "{player} disconnected"),
            AbortReason::ReadFailed { player, message } => {
                write!(f, "reading from {player} failed: {message}")
            }
        }
    }
}

/// Final result of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
    Aborted(AbortReason),
}

impl From<GameOutcome> for Outcome {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Winner(player) => Outcome::Win(player),
            GameOutcome::Draw => Outcome::Draw,
        }
    }
}

/// Dispatcher state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Player),
    /// A parsed column waiting for range and capacity checks
    Applying { player: Player, column: i64 },
    Finished(Outcome),
}

pub struct TurnDispatcher {
    game: Game,
    mode: Mode,
    broadcaster: Broadcaster,
    computer: ComputerOpponent,
    state: TurnState,
}

impl TurnDispatcher {
    /// Build a dispatcher for a fresh game.
    ///
    /// `remotes` must hold exactly the transports `mode` seats, in seat order.
    pub fn new(
        game: Game,
        mode: Mode,
        console: Box<dyn Transport>,
        remotes: Vec<Box<dyn Transport>>,
    ) -> Result<Self, SetupError> {
        let expected = mode.remote_count();
        if remotes.len() != expected {
            return Err(SetupError::ParticipantCount {
                mode,
                expected,
                actual: remotes.len(),
            });
        }

        let state = TurnState::AwaitingMove(game.current_player());
        Ok(Self {
            game,
            mode,
            broadcaster: Broadcaster::new(mode, console, remotes),
            computer: ComputerOpponent::new(),
            state,
        })
    }

    /// Replace the scripted opponent, e.g. with a seeded one
    pub fn with_computer(mut self, computer: ComputerOpponent) -> Self {
        self.computer = computer;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Show the initial board to every seat
    pub async fn start(&mut self) {
        let board = self.game.board();
        info!(
            mode = %self.mode,
            rows = board.rows(),
            columns = board.columns(),
            "game started"
        );
        self.broadcaster.show_board(self.game.board()).await;
    }

    /// Advance the state machine by one transition
    pub async fn step(&mut self) -> &TurnState {
        let next = match self.state {
            TurnState::AwaitingMove(player) => self.await_move(player).await,
            TurnState::Applying { player, column } => self.apply(player, column).await,
            TurnState::Finished(_) => return &self.state,
        };
        self.state = next;
        &self.state
    }

    /// Play until the session ends, then tear down the transports
    pub async fn run(&mut self) -> Outcome {
        self.start().await;
        let outcome = loop {
            if let TurnState::Finished(outcome) = self.step().await {
                break outcome.clone();
            }
        };

        match &outcome {
            Outcome::Aborted(reason) => {
                warn!(%reason, "game aborted");
                self.broadcaster.broadcast(GAME_ENDED_BY_ERROR).await;
            }
            Outcome::Win(player) => info!(
                winner = player.number(),
                moves = self.game.moves_played(),
                "game over"
            ),
            Outcome::Draw => info!(moves = self.game.moves_played(), "game drawn"),
        }
        self.broadcaster.close_all().await;
        outcome
    }

    async fn await_move(&mut self, player: Player) -> TurnState {
        let seat = self.mode.seat(player);
        let columns = self.game.board().columns();

        if seat == Seat::Computer {
            let column = self.computer.pick(columns);
            self.broadcaster
                .send_to(Seat::Console, &computer_choice(player, column))
                .await;
            return TurnState::Applying { player, column };
        }

        self.broadcaster.announce_turn(player, seat, columns).await;
        let line = match self.broadcaster.read_from(seat).await {
            Ok(line) => line,
            Err(err) => {
                warn!(player = player.number(), ?seat, %err, "move source failed");
                return TurnState::Finished(Outcome::Aborted(AbortReason::from_transport(
                    player, err,
                )));
            }
        };

        match parse_column(&line) {
            Ok(column) => TurnState::Applying { player, column },
            Err(err) => {
                debug!(player = player.number(), %err, "rejected input");
                self.broadcaster.send_to(seat, &move_error_notice(&err)).await;
                TurnState::AwaitingMove(player)
            }
        }
    }

    async fn apply(&mut self, player: Player, column: i64) -> TurnState {
        let seat = self.mode.seat(player);
        let placement = match self.game.play(column) {
            Ok(placement) => placement,
            Err(err) => {
                debug!(player = player.number(), %err, "rejected move");
                self.broadcaster.send_to(seat, &move_error_notice(&err)).await;
                return TurnState::AwaitingMove(self.game.current_player());
            }
        };

        debug!(
            player = player.number(),
            column = placement.column + 1,
            row = placement.row,
            "move accepted"
        );
        self.broadcaster.show_board(self.game.board()).await;

        match placement.outcome {
            Some(GameOutcome::Winner(winner)) => {
                self.broadcaster.broadcast(&win_announcement(winner)).await;
                TurnState::Finished(Outcome::Win(winner))
            }
            Some(GameOutcome::Draw) => {
                self.broadcaster.broadcast(DRAW_ANNOUNCEMENT).await;
                TurnState::Finished(Outcome::Draw)
            }
            None => TurnState::AwaitingMove(self.game.current_player()),
        }
    }
}
