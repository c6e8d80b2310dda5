//! Board encoding for the local terminal.
//!
//! Produces the same characters as [`Board::render`] and optionally wraps each
//! marker in crossterm colour commands. Everything is queued into a caller
//! owned byte buffer so a whole board goes out in a single write.

use std::io;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Board;
use crate::types::Cell;

/// How markers are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStyle {
    Plain,
    Colored,
}

fn marker_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Empty => None,
        Cell::PlayerOne => Some(Color::Red),
        Cell::PlayerTwo => Some(Color::Yellow),
    }
}

/// Encode `board` into `out`, appending to whatever is already there.
pub fn encode_board_into(board: &Board, style: BoardStyle, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(Print('\n'))?;
    for row in 0..board.rows() {
        for &cell in board.row(row) {
            match (style, marker_color(cell)) {
                (BoardStyle::Colored, Some(color)) => {
                    out.queue(SetForegroundColor(color))?;
                    out.queue(SetAttribute(Attribute::Bold))?;
                    out.queue(Print(cell.marker()))?;
                    out.queue(SetAttribute(Attribute::Reset))?;
                    out.queue(ResetColor)?;
                }
                _ => {
                    out.queue(Print(cell.marker()))?;
                }
            }
            out.queue(Print(' '))?;
        }
        out.queue(Print('\n'))?;
    }

    for column in 1..=board.columns() {
        out.queue(Print(column))?;
        out.queue(Print(' '))?;
    }
    out.queue(Print("\n\n"))?;
    Ok(())
}
