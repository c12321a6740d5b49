//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves first in every game).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Display symbols chosen for the two players before a game starts.
///
/// Symbols are free-form strings chosen by the presentation layer. They may
/// be equal or empty; no uniqueness is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    player_one: String,
    player_two: String,
}

impl Symbols {
    /// Creates a symbol pair.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Returns the symbol for the given player.
    pub fn for_player(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player. Marks are permanent for the life of a board.
    Marked(Player),
}

/// Error that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", _0, _1)]
    Occupied(usize, usize),

    /// The coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are out of bounds", _0, _1)]
    OutOfBounds(usize, usize),
}

impl std::error::Error for PlaceError {}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given coordinates, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Checks if the cell at the given coordinates is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Places the player's mark at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] when row or col exceeds 2, and
    /// [`PlaceError::Occupied`] when the cell already holds a mark. The
    /// board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), PlaceError> {
        match self.get(row, col) {
            None => Err(PlaceError::OutOfBounds(row, col)),
            Some(Cell::Marked(_)) => Err(PlaceError::Occupied(row, col)),
            Some(Cell::Empty) => {
                self.cells[row][col] = Cell::Marked(player);
                Ok(())
            }
        }
    }

    /// Returns the rows of the board in order.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Formats the board as a human-readable grid using the given symbols.
    ///
    /// Empty cells render as `.`.
    pub fn display(&self, symbols: &Symbols) -> String {
        let mut result = String::new();
        for (row_idx, row) in self.cells.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Empty => result.push('.'),
                    Cell::Marked(player) => result.push_str(symbols.for_player(*player)),
                }
                if col_idx < 2 {
                    result.push('|');
                }
            }
            if row_idx < 2 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
