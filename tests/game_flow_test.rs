//! End-to-end tests driving the game controller through the view boundary.

use tictactoe_core::{
    Board, Cell, GameController, Notification, Player, Symbols, View, ViewEvent, check_win, is_full,
};

/// View that records every notification it receives.
#[derive(Debug, Default)]
struct RecordingView {
    notifications: Vec<Notification>,
}

impl View for RecordingView {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

fn new_game(p1: &str, p2: &str) -> GameController<RecordingView> {
    let mut controller = GameController::new(RecordingView::default());
    controller.handle(ViewEvent::StartRequested {
        player_one_symbol: p1.to_string(),
        player_two_symbol: p2.to_string(),
    });
    controller
}

fn select(controller: &mut GameController<RecordingView>, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        controller.handle(ViewEvent::CellSelected { row, col });
    }
}

fn last_message(controller: &GameController<RecordingView>) -> Option<&str> {
    controller
        .view()
        .notifications
        .iter()
        .rev()
        .find_map(|n| match n {
            Notification::GameEnded(message) => Some(message.as_str()),
            _ => None,
        })
}

#[test]
fn test_fresh_start_has_empty_board() {
    let controller = new_game("🦀", "🐢");
    let session = controller.session().expect("session after start");

    assert!(!is_full(session.board()));
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(session.board().get(row, col), Some(Cell::Empty));
        }
    }
    assert_eq!(session.active_player(), Player::One);
}

#[test]
fn test_top_row_win_announces_player_one_symbol() {
    let mut controller = new_game("🦀", "🐢");
    // Player one takes the top row while player two answers below.
    select(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    let session = controller.session().unwrap();
    assert!(session.is_over());
    assert!(check_win(session.board(), Player::One));
    assert_eq!(last_message(&controller), Some("Player 🦀 wins!"));
}

#[test]
fn test_diagonal_down_right_win() {
    let mut controller = new_game("X", "O");
    select(&mut controller, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    let session = controller.session().unwrap();
    assert!(session.is_over());
    assert!(check_win(session.board(), Player::One));
    assert_eq!(last_message(&controller), Some("Player X wins!"));
}

#[test]
fn test_corner_diagonal_down_left_win() {
    let mut controller = new_game("X", "O");
    select(&mut controller, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);

    let session = controller.session().unwrap();
    assert!(session.is_over());
    assert!(check_win(session.board(), Player::One));
    assert_eq!(last_message(&controller), Some("Player X wins!"));
}

#[test]
fn test_player_two_can_win() {
    let mut controller = new_game("X", "O");
    // Player two takes the middle column.
    select(
        &mut controller,
        &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)],
    );

    let session = controller.session().unwrap();
    assert!(session.is_over());
    assert!(check_win(session.board(), Player::Two));
    assert_eq!(last_message(&controller), Some("Player O wins!"));
}

#[test]
fn test_board_fills_to_tie() {
    let mut controller = new_game("X", "O");
    select(
        &mut controller,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ],
    );

    let session = controller.session().unwrap();
    assert!(session.is_over());
    assert!(is_full(session.board()));
    assert!(!check_win(session.board(), Player::One));
    assert!(!check_win(session.board(), Player::Two));
    assert_eq!(last_message(&controller), Some("The game is a 👔"));
}

#[test]
fn test_occupied_cell_mid_game_changes_nothing() {
    let mut controller = new_game("X", "O");
    select(&mut controller, &[(0, 0), (1, 1)]);
    let board_before = controller.session().unwrap().board().clone();
    let notifications_before = controller.view().notifications.len();

    // Player one clicks both occupied cells.
    select(&mut controller, &[(0, 0), (1, 1)]);

    let session = controller.session().unwrap();
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.active_player(), Player::One);
    assert_eq!(controller.view().notifications.len(), notifications_before);
    assert_eq!(last_message(&controller), None);
}

#[test]
fn test_out_of_bounds_selection_is_absorbed() {
    let mut controller = new_game("X", "O");
    select(&mut controller, &[(3, 0), (0, 17), (usize::MAX, usize::MAX)]);

    let session = controller.session().unwrap();
    assert_eq!(session.active_player(), Player::One);
    assert!(!session.is_over());
}

#[test]
fn test_restart_preserves_resubmitted_symbols() {
    let mut controller = new_game("🦀", "🐢");
    select(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(controller.session().unwrap().is_over());

    // The view does not re-collect symbols; it resubmits the stored pair.
    controller.handle(ViewEvent::StartRequested {
        player_one_symbol: "🦀".to_string(),
        player_two_symbol: "🐢".to_string(),
    });

    let session = controller.session().unwrap();
    assert!(!session.is_over());
    assert!(session.played_before());
    assert_eq!(session.active_player(), Player::One);
    assert_eq!(session.symbols(), &Symbols::new("🦀", "🐢"));
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(session.board().get(row, col), Some(Cell::Empty));
        }
    }
    assert_eq!(
        controller.view().notifications.last(),
        Some(&Notification::GameStarted {
            board: Board::new(),
            restart: true,
        })
    );
}

#[test]
fn test_restart_accepts_new_symbols() {
    let mut controller = new_game("X", "O");
    select(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    controller.handle(ViewEvent::StartRequested {
        player_one_symbol: "A".to_string(),
        player_two_symbol: "B".to_string(),
    });
    select(&mut controller, &[(2, 0), (1, 0), (2, 1), (1, 1), (2, 2)]);

    assert_eq!(last_message(&controller), Some("Player A wins!"));
}

#[test]
fn test_board_snapshot_serializes() {
    let mut controller = new_game("X", "O");
    select(&mut controller, &[(0, 0)]);

    let snapshot = controller
        .view()
        .notifications
        .iter()
        .find_map(|n| match n {
            Notification::BoardChanged(board) => Some(board),
            _ => None,
        })
        .expect("board snapshot after a move");

    let value = serde_json::to_value(snapshot).expect("board serializes");
    assert_eq!(
        value,
        serde_json::json!({
            "cells": [
                [{ "Marked": "One" }, "Empty", "Empty"],
                ["Empty", "Empty", "Empty"],
                ["Empty", "Empty", "Empty"],
            ]
        })
    );
}
