//! Win detection logic for tic-tac-toe.
//!
//! Rather than enumerating the eight winning triples, the scan anchors four
//! candidate lines at every cell: horizontal, vertical, and the two downward
//! diagonals. A line whose coordinates leave the grid is simply false, so
//! each true diagonal is tested once from its only in-bounds anchor while
//! rows and columns are probed redundantly from several anchors. The
//! redundancy is harmless and the anchor order is kept as-is so edge and
//! corner behavior stays exact.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks whether the given player owns at least one complete line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    for y in 0..3i32 {
        for x in 0..3i32 {
            let horiz = [(y, x), (y, x + 1), (y, x + 2)];
            let vert = [(y, x), (y + 1, x), (y + 2, x)];
            let diag_dl = [(y, x), (y + 1, x - 1), (y + 2, x - 2)];
            let diag_dr = [(y, x), (y + 1, x + 1), (y + 2, x + 2)];

            if line_marked(board, player, horiz)
                || line_marked(board, player, vert)
                || line_marked(board, player, diag_dr)
                || line_marked(board, player, diag_dl)
            {
                return true;
            }
        }
    }

    false
}

/// True when all three coordinates are in bounds and marked by `player`.
fn line_marked(board: &Board, player: Player, line: [(i32, i32); 3]) -> bool {
    line.iter().all(|&(y, x)| {
        let (Ok(row), Ok(col)) = (usize::try_from(y), usize::try_from(x)) else {
            return false;
        };
        board.get(row, col) == Some(Cell::Marked(player))
    })
}
