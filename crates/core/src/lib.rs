//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the rules, and turn bookkeeping.
//! It has **no dependencies** on networking, consoles, or any I/O, making it:
//!
//! - **Deterministic**: the same column sequence always yields the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: the turn dispatcher, tests, and benches all drive it directly
//!
//! # Module Structure
//!
//! - [`board`]: `rows x columns` grid with gravity placement, win scan, and text render
//! - [`game`]: current player, move validation, and outcome detection
//! - [`error`]: typed setup and move errors
//!
//! # Game Rules
//!
//! - Boards are between 4 and 20 cells in each dimension
//! - Player one moves first; players alternate after every accepted move
//! - A piece falls to the lowest empty cell of its column
//! - Four aligned pieces (horizontal, vertical, or either diagonal) win
//! - A full board without a winner is a draw
//!
//! # Example
//!
//! ```
//! use connect_four_core::{BoardSize, Game, GameOutcome};
//! use connect_four_types::Player;
//!
//! let mut game = Game::new(BoardSize::new(6, 7).unwrap());
//!
//! // Player one stacks column 1 while player two answers in column 2
//! for column in [1, 2, 1, 2, 1, 2] {
//!     game.play(column).unwrap();
//! }
//! let placement = game.play(1).unwrap();
//!
//! assert_eq!(placement.outcome, Some(GameOutcome::Winner(Player::One)));
//! ```

pub mod board;
pub mod error;
pub mod game;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSize, WinningLine};
pub use error::{MoveError, SetupError};
pub use game::{parse_column, Game, GameOutcome, Placement};
