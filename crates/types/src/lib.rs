//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, turn dispatch, wire protocol, console).
//!
//! # Board Dimensions
//!
//! Boards are rectangular and sized by the operator at startup:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 4 | Smallest row/column count (a four-in-a-row must fit) |
//! | `MAX_DIMENSION` | 20 | Largest row/column count |
//! | `WIN_LENGTH` | 4 | Consecutive pieces needed to win |
//! | `WIDE_BOARD_COLUMNS` | 9 | Above this the column legend no longer lines up |
//!
//! # Seats
//!
//! Every [`Mode`] assigns a [`Seat`] to each [`Player`]: the local operator
//! console, one of the remote transports, or the scripted computer opponent.
//! The assignment is a lookup table, so adding a mode is a data change.
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{Mode, Player, Seat};
//!
//! let mode = Mode::from_str("client-vs-computer").unwrap();
//! assert_eq!(mode.seat(Player::One), Seat::Remote(0));
//! assert_eq!(mode.seat(Player::Two), Seat::Computer);
//! assert_eq!(mode.remote_count(), 1);
//!
//! assert_eq!(Player::One.other(), Player::Two);
//! assert_eq!(Player::Two.number(), 2);
//! ```

use std::fmt;

/// Smallest allowed number of rows or columns
pub const MIN_DIMENSION: usize = 4;

/// Largest allowed number of rows or columns
pub const MAX_DIMENSION: usize = 20;

/// Number of aligned pieces that wins the game
pub const WIN_LENGTH: usize = 4;

/// Column count above which the single-space column legend gets misaligned
pub const WIDE_BOARD_COLUMNS: usize = 9;

/// Default TCP port of the game server
pub const DEFAULT_PORT: u16 = 8000;

/// One of the two players.
///
/// Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number used in every user-facing message
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// 0-based index into per-player tables
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Convert player to the cell state it leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Single-character marker used by the text render
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Cell;
    ///
    /// assert_eq!(Cell::Empty.marker(), '.');
    /// assert_eq!(Cell::PlayerOne.marker(), 'X');
    /// assert_eq!(Cell::PlayerTwo.marker(), 'O');
    /// ```
    pub fn marker(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Where a player's moves come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The operator typing at the server console
    Console,
    /// A remote participant, indexed by connection order
    Remote(usize),
    /// The scripted random opponent
    Computer,
}

/// Game modes selectable at startup
///
/// The mode fixes how many remote participants connect and which seat each
/// player occupies:
///
/// | Mode | Player 1 | Player 2 |
/// |------|----------|----------|
/// | `ServerVsClient` | console | remote #1 |
/// | `ClientVsClient` | remote #1 | remote #2 |
/// | `ServerVsComputer` | console | computer |
/// | `ClientVsComputer` | remote #1 | computer |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    ServerVsClient,
    ClientVsClient,
    ServerVsComputer,
    ClientVsComputer,
}

/// Seat table indexed by `[mode][player]`
const SEATS: [[Seat; 2]; 4] = [
    [Seat::Console, Seat::Remote(0)],
    [Seat::Remote(0), Seat::Remote(1)],
    [Seat::Console, Seat::Computer],
    [Seat::Remote(0), Seat::Computer],
];

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 4] = [
        Mode::ServerVsClient,
        Mode::ClientVsClient,
        Mode::ServerVsComputer,
        Mode::ClientVsComputer,
    ];

    fn table_index(self) -> usize {
        match self {
            Mode::ServerVsClient => 0,
            Mode::ClientVsClient => 1,
            Mode::ServerVsComputer => 2,
            Mode::ClientVsComputer => 3,
        }
    }

    /// Seat occupied by `player` under this mode
    pub fn seat(self, player: Player) -> Seat {
        SEATS[self.table_index()][player.index()]
    }

    /// Number of remote participants this mode waits for
    pub fn remote_count(self) -> usize {
        Player::ALL
            .iter()
            .filter(|&&p| matches!(self.seat(p), Seat::Remote(_)))
            .count()
    }

    /// The player seated at remote transport `index`
    pub fn remote_player(self, index: usize) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&p| self.seat(p) == Seat::Remote(index))
    }

    /// Whether the server needs to listen for connections at all
    pub fn is_networked(self) -> bool {
        self.remote_count() > 0
    }

    /// Map a 1-based menu choice to a mode
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    /// Parse mode from string (case-insensitive, dashes and underscores ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use connect_four_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("ServerVsClient"), Some(Mode::ServerVsClient));
    /// assert_eq!(Mode::from_str("client_vs_client"), Some(Mode::ClientVsClient));
    /// assert_eq!(Mode::from_str("server-vs-computer"), Some(Mode::ServerVsComputer));
    /// assert_eq!(Mode::from_str("solitaire"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "servervsclient" => Some(Mode::ServerVsClient),
            "clientvsclient" => Some(Mode::ClientVsClient),
            "servervscomputer" => Some(Mode::ServerVsComputer),
            "clientvscomputer" => Some(Mode::ClientVsComputer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ServerVsClient => "ServerVsClient",
            Mode::ClientVsClient => "ClientVsClient",
            Mode::ServerVsComputer => "ServerVsComputer",
            Mode::ClientVsComputer => "ClientVsComputer",
        }
    }

    /// Human-readable label shown in the setup menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            Mode::ServerVsClient => "Server vs Client",
            Mode::ClientVsClient => "Client vs Client",
            Mode::ServerVsComputer => "Server vs Computer",
            Mode::ClientVsComputer => "Client vs Computer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_table_matches_mode_descriptions() {
        assert_eq!(Mode::ServerVsClient.seat(Player::One), Seat::Console);
        assert_eq!(Mode::ServerVsClient.seat(Player::Two), Seat::Remote(0));
        assert_eq!(Mode::ClientVsClient.seat(Player::One), Seat::Remote(0));
        assert_eq!(Mode::ClientVsClient.seat(Player::Two), Seat::Remote(1));
        assert_eq!(Mode::ServerVsComputer.seat(Player::One), Seat::Console);
        assert_eq!(Mode::ServerVsComputer.seat(Player::Two), Seat::Computer);
        assert_eq!(Mode::ClientVsComputer.seat(Player::One), Seat::Remote(0));
        assert_eq!(Mode::ClientVsComputer.seat(Player::Two), Seat::Computer);
    }

    #[test]
    fn remote_counts() {
        assert_eq!(Mode::ServerVsClient.remote_count(), 1);
        assert_eq!(Mode::ClientVsClient.remote_count(), 2);
        assert_eq!(Mode::ServerVsComputer.remote_count(), 0);
        assert_eq!(Mode::ClientVsComputer.remote_count(), 1);
        assert!(!Mode::ServerVsComputer.is_networked());
    }

    #[test]
    fn remote_player_lookup() {
        assert_eq!(Mode::ServerVsClient.remote_player(0), Some(Player::Two));
        assert_eq!(Mode::ClientVsClient.remote_player(1), Some(Player::Two));
        assert_eq!(Mode::ClientVsComputer.remote_player(0), Some(Player::One));
        assert_eq!(Mode::ClientVsComputer.remote_player(1), None);
    }

    #[test]
    fn menu_choices() {
        assert_eq!(Mode::from_menu_choice(1), Some(Mode::ServerVsClient));
        assert_eq!(Mode::from_menu_choice(4), Some(Mode::ClientVsComputer));
        assert_eq!(Mode::from_menu_choice(0), None);
        assert_eq!(Mode::from_menu_choice(5), None);
    }

    #[test]
    fn player_display() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.to_cell(), Cell::PlayerTwo);
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::PlayerOne.is_empty());
    }
}
