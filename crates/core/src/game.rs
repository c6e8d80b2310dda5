//! Game state: board, whose turn it is, and the outcome once decided.
//!
//! A win can only be created by the piece just placed, so after each move only
//! the mover is checked for four in a row. The opponent's pieces did not change
//! and already failed that check on their own turn.

use crate::board::{Board, BoardSize};
use crate::error::MoveError;
use crate::types::Player;

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    /// 0-based row the piece landed on (0 is the top row)
    pub row: usize,
    /// 0-based column
    pub column: usize,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves_played: usize,
}

/// Parse one input line as a column number.
///
/// Surrounding whitespace is ignored. Empty lines and anything that is not a
/// decimal integer are rejected; range checking happens in [`Game::play`].
pub fn parse_column(input: &str) -> Result<i64, MoveError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| MoveError::Parse {
        input: trimmed.to_string(),
    })
}

impl Game {
    /// Create initial game state, player one to move
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::One,
            outcome: None,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of pieces placed through [`Game::play`]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Apply a 1-based column for the current player.
    ///
    /// On success the piece is placed, the outcome is decided, and the turn
    /// passes to the other player unless the game just ended. On error the
    /// state is untouched and the same player keeps the turn.
    pub fn play(&mut self, column: i64) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let columns = self.board.columns();
        if column < 1 || column > columns as i64 {
            return Err(MoveError::OutOfRange { column, columns });
        }
        let index = (column - 1) as usize;

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(index, player)
            .ok_or(MoveError::ColumnFull { column: index + 1 })?;
        self.moves_played += 1;

        debug_assert!(
            !self.board.has_four_in_a_row(player.other()),
            "a win can only be created by the player who just moved"
        );

        let outcome = if self.board.has_four_in_a_row(player) {
            Some(GameOutcome::Winner(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(_) => self.outcome = outcome,
            None => self.current_player = player.other(),
        }

        Ok(Placement {
            player,
            row,
            column: index,
            outcome,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
