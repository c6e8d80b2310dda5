use crate::types::Mode;

/// Errors raised while configuring a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error(
        "invalid board size {columns}x{rows}: rows and columns must be between {min} and {max}",
        min = crate::types::MIN_DIMENSION,
        max = crate::types::MAX_DIMENSION
    )]
    InvalidSize { rows: usize, columns: usize },

    #[error("invalid choice {0:?}")]
    InvalidChoice(String),

    #[error("{mode} needs {expected} remote participant(s), got {actual}")]
    ParticipantCount {
        mode: Mode,
        expected: usize,
        actual: usize,
    },
}

/// Errors produced while validating and applying a move.
///
/// All of these are recoverable: the board is unchanged and the same player
/// is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid input {input:?}: expected a column number")]
    Parse { input: String },

    #[error("column {column} is out of range (1-{columns})")]
    OutOfRange { column: i64, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameOver,
}
