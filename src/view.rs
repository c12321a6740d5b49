//! The boundary between the game core and a presentation layer.
//!
//! The core never touches widgets or rendering. A presentation layer feeds
//! it [`ViewEvent`]s and implements [`View`] to receive [`Notification`]s,
//! all delivered synchronously inside the handler that produced them.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Inbound events the core consumes from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The start control was activated with the chosen player symbols.
    StartRequested {
        /// Display symbol for player one.
        player_one_symbol: String,
        /// Display symbol for player two.
        player_two_symbol: String,
    },
    /// A cell on the grid was selected.
    CellSelected {
        /// Row index (0-2 when in bounds).
        row: usize,
        /// Column index (0-2 when in bounds).
        col: usize,
    },
}

/// Outbound notifications the core produces for the view to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A fresh game began. `restart` is false on the very first game and
    /// true afterwards, letting the view toggle its start control label
    /// and decide whether to re-collect player symbols.
    GameStarted {
        /// Snapshot of the freshly rebuilt (empty) board.
        board: Board,
        /// Whether a previous game preceded this one.
        restart: bool,
    },
    /// A mark was placed. The snapshot reflects the board after the move.
    BoardChanged(Board),
    /// The game reached a terminal state. Emitted exactly once per game,
    /// carrying either the win message naming the winner's symbol or the
    /// tie message.
    GameEnded(String),
}

/// Presentation-side observer of the game core.
pub trait View {
    /// Receives a notification from the core.
    fn notify(&mut self, notification: Notification);
}
