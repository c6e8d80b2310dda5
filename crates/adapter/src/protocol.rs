//! Protocol module - text messages exchanged with participants
//!
//! The wire format is plain newline-terminated text. The server sends board
//! renders, turn prompts, notices, and terminal announcements; a participant
//! answers a prompt with one line holding a decimal column number.
//!
//! Turn prompts are recognised by clients through [`PROMPT_MARKER`].

use connect_four_core::MoveError;
use connect_four_types::Player;

/// Substring that identifies a turn prompt on the client side
pub const PROMPT_MARKER: &str = "Enter column";

/// Sent to the acting participant after unparsable input
pub const INVALID_INPUT: &str = "Invalid input. Please enter a valid column number.\n";

/// Sent to the acting participant when the chosen column has no room
pub const COLUMN_FULL: &str = "Column is full. Try another one.\n";

pub const DRAW_ANNOUNCEMENT: &str = "It's a draw!\n";

/// Broadcast before teardown when a participant channel fails
pub const GAME_ENDED_BY_ERROR: &str = "Game ended due to error.\n";

/// Prompt shown to the player on turn, without a line terminator.
///
/// # Examples
///
/// ```
/// use connect_four_adapter::protocol::turn_prompt;
/// use connect_four_types::Player;
///
/// assert_eq!(
///     turn_prompt(Player::Two, 7),
///     "Your turn (Player 2). Enter column (1-7): "
/// );
/// ```
pub fn turn_prompt(player: Player, columns: usize) -> String {
    format!("Your turn ({player}). {PROMPT_MARKER} (1-{columns}): ")
}

/// The turn prompt as a full wire line for remote participants
pub fn turn_prompt_line(player: Player, columns: usize) -> String {
    let mut line = turn_prompt(player, columns);
    line.push('\n');
    line
}

/// Sent to every participant that is not on turn
pub fn waiting_notice(player: Player) -> String {
    format!("{player} is making a move...\n")
}

pub fn win_announcement(player: Player) -> String {
    format!("{player} wins!\n")
}

/// Local announcement of the scripted opponent's pick
pub fn computer_choice(player: Player, column: i64) -> String {
    format!("Computer ({player}) chooses column {column}\n")
}

/// Notice delivered to the acting participant for a rejected move
pub fn move_error_notice(err: &MoveError) -> String {
    match err {
        MoveError::Parse { .. } => INVALID_INPUT.to_string(),
        MoveError::OutOfRange { columns, .. } => {
            format!("Invalid input. Please enter a number between 1 and {columns}.\n")
        }
        MoveError::ColumnFull { .. } => COLUMN_FULL.to_string(),
        MoveError::GameOver => "The game is already over.\n".to_string(),
    }
}

/// Whether a server line asks the reader for a column
pub fn is_turn_prompt(line: &str) -> bool {
    line.contains(PROMPT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices() {
        assert_eq!(waiting_notice(Player::One), "Player 1 is making a move...\n");
        assert_eq!(win_announcement(Player::Two), "Player 2 wins!\n");
        assert_eq!(
            computer_choice(Player::Two, 3),
            "Computer (Player 2) chooses column 3\n"
        );
    }

    #[test]
    fn test_prompt_detection() {
        assert!(is_turn_prompt(&turn_prompt_line(Player::One, 9)));
        assert!(!is_turn_prompt(&waiting_notice(Player::One)));
        assert!(!is_turn_prompt(DRAW_ANNOUNCEMENT));
    }

    #[test]
    fn test_move_error_notice() {
        let parse = MoveError::Parse {
            input: "abc".into(),
        };
        assert_eq!(move_error_notice(&parse), INVALID_INPUT);

        let range = MoveError::OutOfRange {
            column: 9,
            columns: 7,
        };
        assert_eq!(
            move_error_notice(&range),
            "Invalid input. Please enter a number between 1 and 7.\n"
        );
        assert_eq!(
            move_error_notice(&MoveError::ColumnFull { column: 2 }),
            COLUMN_FULL
        );
    }
}
