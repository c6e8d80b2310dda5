//! Board module - manages the game grid
//!
//! The board is a `rows x columns` grid where each cell is empty or holds one
//! player's piece. Storage is a flat row-major vector sized once at creation.
//! Coordinates: (row, column) where row 0 is the top and column 0 the left.
//!
//! Pieces obey gravity: a dropped piece lands on the lowest empty cell of its
//! column, so no empty cell ever sits below an occupied one.

use arrayvec::ArrayVec;

use crate::error::SetupError;
use crate::types::{Cell, Player, MAX_DIMENSION, MIN_DIMENSION, WIDE_BOARD_COLUMNS, WIN_LENGTH};

/// Scan directions as (row step, column step): horizontal, vertical,
/// diagonal bottom-left to top-right, diagonal top-left to bottom-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

/// The cells of one winning line, in scan order
pub type WinningLine = ArrayVec<(usize, usize), WIN_LENGTH>;

/// Validated board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    rows: usize,
    columns: usize,
}

impl BoardSize {
    /// Board size presets offered by the setup menu, labelled columns x rows
    pub const PRESETS: [(&'static str, BoardSize); 3] = [
        ("8x6", BoardSize { rows: 6, columns: 8 }),
        ("6x7", BoardSize { rows: 7, columns: 6 }),
        ("9x14", BoardSize { rows: 14, columns: 9 }),
    ];

    /// Validate dimensions against `[MIN_DIMENSION, MAX_DIMENSION]`
    pub fn new(rows: usize, columns: usize) -> Result<Self, SetupError> {
        let valid = |d: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&d);
        if !valid(rows) || !valid(columns) {
            return Err(SetupError::InvalidSize { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True when the column legend will no longer line up with the cells
    pub fn is_wide(&self) -> bool {
        self.columns > WIDE_BOARD_COLUMNS
    }
}

impl Default for BoardSize {
    /// The classic 7 columns x 6 rows board
    fn default() -> Self {
        Self { rows: 6, columns: 7 }
    }
}

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.rows * size.columns],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.size.columns + column
    }

    fn in_bounds(&self, row: isize, column: isize) -> bool {
        row >= 0
            && column >= 0
            && (row as usize) < self.size.rows
            && (column as usize) < self.size.columns
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn columns(&self) -> usize {
        self.size.columns
    }

    /// Get cell at (row, column)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.size.rows || column >= self.size.columns {
            return None;
        }
        Some(self.cells[self.index(row, column)])
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size.columns;
        &self.cells[start..start + self.size.columns]
    }

    /// Check if a column has no empty cell left
    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[self.index(0, column)].is_empty()
    }

    /// Drop a piece into a 0-based column.
    ///
    /// Scans the column from the bottom row upward and fills the first empty
    /// cell, returning the row it landed on. Returns `None` without touching
    /// the board when the column is full. `column` must be in range; range
    /// checking belongs to the caller.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        for row in (0..self.size.rows).rev() {
            let idx = self.index(row, column);
            if self.cells[idx].is_empty() {
                self.cells[idx] = player.to_cell();
                return Some(row);
            }
        }
        None
    }

    /// Check if the board is completely full.
    ///
    /// Because of gravity, a full top row means every column is full.
    pub fn is_full(&self) -> bool {
        self.row(0).iter().all(|cell| !cell.is_empty())
    }

    /// Check whether `player` owns four aligned consecutive cells
    pub fn has_four_in_a_row(&self, player: Player) -> bool {
        self.find_four_in_a_row(player).is_some()
    }

    /// Find the first four-cell window owned by `player`.
    ///
    /// Scans every window in each of the four directions and stops at the
    /// first match; other winning lines are not reported.
    pub fn find_four_in_a_row(&self, player: Player) -> Option<WinningLine> {
        let target = player.to_cell();
        let span = WIN_LENGTH as isize - 1;

        for (dr, dc) in DIRECTIONS {
            for row in 0..self.size.rows as isize {
                for column in 0..self.size.columns as isize {
                    if !self.in_bounds(row + dr * span, column + dc * span) {
                        continue;
                    }
                    let window = (0..WIN_LENGTH as isize)
                        .map(|k| ((row + dr * k) as usize, (column + dc * k) as usize));
                    if window
                        .clone()
                        .all(|(r, c)| self.cells[self.index(r, c)] == target)
                    {
                        return Some(window.collect());
                    }
                }
            }
        }
        None
    }

    /// Check the gravity invariant: no empty cell below an occupied one
    pub fn is_settled(&self) -> bool {
        (0..self.size.columns).all(|column| {
            let mut seen_piece = false;
            for row in 0..self.size.rows {
                let cell = self.cells[self.index(row, column)];
                if !cell.is_empty() {
                    seen_piece = true;
                } else if seen_piece {
                    return false;
                }
            }
            true
        })
    }

    /// Render the board as the text sent to every participant.
    ///
    /// Layout: an empty line, one line per row with a marker and a space per
    /// cell, a 1-based column legend, then a blank line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.size.rows + 3) * (self.size.columns * 3 + 1));
        out.push('\n');
        for row in 0..self.size.rows {
            for cell in self.row(row) {
                out.push(cell.marker());
                out.push(' ');
            }
            out.push('\n');
        }
        for column in 1..=self.size.columns {
            out.push_str(&column.to_string());
            out.push(' ');
        }
        out.push_str("\n\n");
        out
    }

    /// Create from marker rows for testing (`.`, `X`, `O`, top row first)
    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let cells: Vec<Cell> = rows
            .iter()
            .flat_map(|line| {
                line.chars().filter(|c| !c.is_whitespace()).map(|c| match c {
                    'X' => Cell::PlayerOne,
                    'O' => Cell::PlayerTwo,
                    _ => Cell::Empty,
                })
            })
            .collect();
        let columns = cells.len() / rows.len();
        let size = BoardSize::new(rows.len(), columns).unwrap();
        assert_eq!(cells.len(), size.rows * size.columns);
        Self { size, cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::new(4, 4).is_ok());
        assert!(BoardSize::new(20, 20).is_ok());
        assert_eq!(
            BoardSize::new(3, 7),
            Err(SetupError::InvalidSize { rows: 3, columns: 7 })
        );
        assert!(BoardSize::new(6, 21).is_err());
        assert!(BoardSize::new(0, 0).is_err());
    }

    #[test]
    fn test_wide_board_flag() {
        assert!(!BoardSize::new(6, 9).unwrap().is_wide());
        assert!(BoardSize::new(6, 10).unwrap().is_wide());
    }

    #[test]
    fn test_presets_are_valid_sizes() {
        for (label, size) in BoardSize::PRESETS {
            assert_eq!(BoardSize::new(size.rows(), size.columns()), Ok(size), "{label}");
            assert_eq!(label, format!("{}x{}", size.columns(), size.rows()));
        }
    }

    #[test]
    fn test_drop_piece_lands_at_bottom() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(3, Player::One), Some(5));
        assert_eq!(board.drop_piece(3, Player::Two), Some(4));
        assert_eq!(board.get(5, 3), Some(Cell::PlayerOne));
        assert_eq!(board.get(4, 3), Some(Cell::PlayerTwo));
        assert!(board.is_settled());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::default();
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&[
            ". . . .",
            ". . . .",
            "O . . .",
            "X X . .",
        ]);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.columns(), 4);
        assert_eq!(board.get(3, 1), Some(Cell::PlayerOne));
        assert_eq!(board.get(2, 0), Some(Cell::PlayerTwo));
    }

    #[test]
    fn test_is_settled_detects_floating_piece() {
        let board = Board::from_rows(&[
            ". . . .",
            "X . . .",
            ". . . .",
            ". . . .",
        ]);
        assert!(!board.is_settled());
    }

    #[test]
    fn test_winning_line_cells() {
        let board = Board::from_rows(&[
            ". . . . .",
            ". . . X .",
            ". . X O .",
            ". X O O .",
            "X O O X .",
        ]);
        let line = board.find_four_in_a_row(Player::One).unwrap();
        assert_eq!(line.as_slice(), &[(4, 0), (3, 1), (2, 2), (1, 3)]);
        assert!(!board.has_four_in_a_row(Player::Two));
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new(BoardSize::new(4, 4).unwrap());
        board.drop_piece(0, Player::One);
        board.drop_piece(1, Player::Two);
        assert_eq!(
            board.render(),
            "\n. . . . \n. . . . \n. . . . \nX O . . \n1 2 3 4 \n\n"
        );
    }
}
