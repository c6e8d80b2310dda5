//! Interactive setup menus shown on the operator console before a session.
//!
//! Both menus loop until they get a valid answer. Only a closed input stream
//! ends them early.

use tracing::debug;

use crate::adapter::{Transport, TransportError};
use crate::core::{BoardSize, SetupError};
use crate::types::{Mode, MAX_DIMENSION, MIN_DIMENSION, WIDE_BOARD_COLUMNS};

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.\n";

/// Parse a 1-based menu answer for a menu with `options` entries
pub fn parse_choice(line: &str, options: usize) -> Result<usize, SetupError> {
    let line = line.trim();
    line.parse::<usize>()
        .ok()
        .filter(|choice| (1..=options).contains(choice))
        .ok_or_else(|| SetupError::InvalidChoice(line.to_string()))
}

async fn read_choice(
    console: &mut dyn Transport,
    options: usize,
) -> Result<Option<usize>, TransportError> {
    console.send(CHOICE_PROMPT).await?;
    let line = console.read_line().await?;
    match parse_choice(&line, options) {
        Ok(choice) => Ok(Some(choice)),
        Err(err) => {
            debug!(%err, "rejected menu answer");
            Ok(None)
        }
    }
}

/// Tell the operator when a board is too wide to line up in a terminal
pub async fn warn_if_wide(
    console: &mut dyn Transport,
    size: BoardSize,
) -> Result<(), TransportError> {
    if size.is_wide() {
        console
            .send(&format!(
                "Warning: The board may look wonky when columns exceed {WIDE_BOARD_COLUMNS}.\n"
            ))
            .await?;
    }
    Ok(())
}

async fn read_dimension(
    console: &mut dyn Transport,
    name: &str,
) -> Result<Option<usize>, TransportError> {
    console
        .send(&format!("Enter number of {name} ({MIN_DIMENSION}-{MAX_DIMENSION}): "))
        .await?;
    let line = console.read_line().await?;
    Ok(line.trim().parse::<usize>().ok())
}

/// Ask for one of the preset sizes or a custom `columns x rows` size
pub async fn select_board_size(console: &mut dyn Transport) -> Result<BoardSize, TransportError> {
    let custom = BoardSize::PRESETS.len() + 1;
    loop {
        let mut menu = String::from("Select Board Size:\n");
        for (number, (label, _)) in BoardSize::PRESETS.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", number + 1, label));
        }
        menu.push_str(&format!("{custom}. Custom\n"));
        console.send(&menu).await?;

        let choice = match read_choice(console, custom).await? {
            Some(choice) => choice,
            None => {
                console.send(INVALID_CHOICE).await?;
                continue;
            }
        };
        if let Some((_, size)) = BoardSize::PRESETS.get(choice - 1) {
            return Ok(*size);
        }

        let columns = read_dimension(console, "columns").await?;
        let rows = read_dimension(console, "rows").await?;
        let size = match (rows, columns) {
            (Some(rows), Some(columns)) => BoardSize::new(rows, columns).ok(),
            _ => None,
        };
        let Some(size) = size else {
            debug!(?rows, ?columns, "rejected custom board size");
            console
                .send(&format!(
                    "Invalid board size. Minimum size is {MIN_DIMENSION}x{MIN_DIMENSION} \
                     and maximum size is {MAX_DIMENSION}x{MAX_DIMENSION}.\n"
                ))
                .await?;
            continue;
        };

        warn_if_wide(console, size).await?;
        return Ok(size);
    }
}

/// Ask for the game mode
pub async fn select_mode(console: &mut dyn Transport) -> Result<Mode, TransportError> {
    loop {
        let mut menu = String::from("Select Game Mode:\n");
        for (number, mode) in Mode::ALL.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", number + 1, mode.menu_label()));
        }
        console.send(&menu).await?;

        let mode = read_choice(console, Mode::ALL.len())
            .await?
            .and_then(|choice| Mode::from_menu_choice(choice as u32));
        match mode {
            Some(mode) => return Ok(mode),
            None => console.send(INVALID_CHOICE).await?,
        }
    }
}
