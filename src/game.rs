//! Game lifecycle and turn orchestration.

use crate::rules;
use crate::types::{Board, Player, Symbols};
use crate::view::{Notification, View, ViewEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Message announced when the board fills without a winner.
const TIE_MESSAGE: &str = "The game is a 👔";

/// State of one play-through of the game.
///
/// Aggregates the board, the active player, the terminal flag, and the
/// display symbols supplied at start. The board is rebuilt fresh on every
/// start or restart; marks within a board only ever go from empty to
/// marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    active_player: Player,
    game_over: bool,
    played_before: bool,
    symbols: Symbols,
}

impl GameSession {
    fn new(symbols: Symbols) -> Self {
        Self {
            board: Board::new(),
            active_player: Player::One,
            game_over: false,
            played_before: false,
            symbols,
        }
    }

    /// Rebuilds the board for a new game, keeping the session alive.
    fn reset(&mut self, symbols: Symbols) {
        self.board = Board::new();
        self.active_player = Player::One;
        self.game_over = false;
        self.played_before = true;
        self.symbols = symbols;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns true once the game has ended in a win or tie.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Returns true if at least one earlier game ran in this session.
    pub fn played_before(&self) -> bool {
        self.played_before
    }

    /// Returns the stored player symbols.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
}

/// Orchestrates the game in response to presentation events.
///
/// Owns the single [`GameSession`] that exists at any time and the [`View`]
/// it reports to. Invalid input — a click outside a running game, on an
/// occupied cell, or out of the grid — is absorbed as a silent no-op
/// rather than surfaced: stray clicks in a casual game should have no
/// effect, not raise errors.
#[derive(Debug)]
pub struct GameController<V: View> {
    session: Option<GameSession>,
    view: V,
}

impl<V: View> GameController<V> {
    /// Creates a controller with no game started.
    pub fn new(view: V) -> Self {
        Self {
            session: None,
            view,
        }
    }

    /// Returns the current session, if a game was ever started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the controller, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Dispatches an inbound presentation event.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::StartRequested {
                player_one_symbol,
                player_two_symbol,
            } => self.start(player_one_symbol, player_two_symbol),
            ViewEvent::CellSelected { row, col } => self.select_cell(row, col),
        }
    }

    /// Starts a new game, or restarts after a finished one.
    ///
    /// Ignored while a game is in progress. The board is rebuilt fresh,
    /// player one moves first, and the passed symbols are stored as-is:
    /// whether a restart re-collects symbols or resubmits the previous
    /// ones is view policy, not the controller's.
    #[instrument(skip(self))]
    pub fn start(&mut self, player_one_symbol: String, player_two_symbol: String) {
        if self.session.as_ref().is_some_and(|s| !s.game_over) {
            debug!("start requested while a game is in progress, ignoring");
            return;
        }

        let symbols = Symbols::new(player_one_symbol, player_two_symbol);
        match self.session.as_mut() {
            Some(session) => session.reset(symbols),
            None => self.session = Some(GameSession::new(symbols)),
        }

        if let Some(session) = &self.session {
            info!(restart = session.played_before, "game started");
            self.view.notify(Notification::GameStarted {
                board: session.board.clone(),
                restart: session.played_before,
            });
        }
    }

    /// Applies a cell selection for the active player.
    ///
    /// A no-op unless a game is in progress and the target cell is empty
    /// and in bounds. On success the view sees the updated board, then
    /// either the end-of-game message or the turn passes to the opponent.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, row: usize, col: usize) {
        let Some(session) = self.session.as_mut() else {
            debug!("cell selected before any game started, ignoring");
            return;
        };
        if session.game_over {
            debug!("cell selected after game over, ignoring");
            return;
        }

        let player = session.active_player;
        if let Err(error) = session.board.place_mark(row, col, player) {
            debug!(%error, "cell selection absorbed");
            return;
        }

        self.view
            .notify(Notification::BoardChanged(session.board.clone()));

        // The mover is checked for the win before any turn switch.
        if rules::check_win(&session.board, player) {
            session.game_over = true;
            let message = format!("Player {} wins!", session.symbols.for_player(player));
            info!(winner = ?player, "game won");
            self.view.notify(Notification::GameEnded(message));
            return;
        }

        if rules::is_full(&session.board) {
            session.game_over = true;
            info!("game tied");
            self.view.notify(Notification::GameEnded(TIE_MESSAGE.to_string()));
            return;
        }

        session.active_player = player.opponent();
    }
}
