//! Tie detection logic for tic-tac-toe.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no cell empty).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| *cell != Cell::Empty)
}
