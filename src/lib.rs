//! Tic-tac-toe game core.
//!
//! Two players alternate marking cells on a 3x3 grid until one owns three
//! in a row or the board fills. This crate holds only the rules and the
//! state machine; rendering, input widgets, and event dispatch belong to a
//! presentation layer that implements the [`View`] trait and feeds the
//! controller [`ViewEvent`]s.
//!
//! # Architecture
//!
//! - **Board model** ([`Board`], [`check_win`], [`is_full`]): the 3x3 grid,
//!   mark placement, and win/tie evaluation.
//! - **Game controller** ([`GameController`]): turn order, game lifecycle
//!   (not started / in progress / ended), and restart handling.
//! - **View boundary** ([`View`], [`Notification`]): synchronous observer
//!   contract through which the core reports renderable state.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, Notification, View};
//!
//! struct Printer;
//!
//! impl View for Printer {
//!     fn notify(&mut self, notification: Notification) {
//!         println!("{notification:?}");
//!     }
//! }
//!
//! let mut controller = GameController::new(Printer);
//! controller.start("X".into(), "O".into());
//! controller.select_cell(1, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod rules;
mod types;
mod view;

// Crate-level exports - Game lifecycle
pub use game::{GameController, GameSession};

// Crate-level exports - Board model
pub use rules::{check_win, is_full};
pub use types::{Board, Cell, PlaceError, Player, Symbols};

// Crate-level exports - View boundary
pub use view::{Notification, View, ViewEvent};
