//! Tic-tac-toe on the console.
//!
//! A line-based reference adapter for the game core: commands on stdin
//! become core events, notifications render as plain text.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_core::{GameController, Notification, Symbols, View, ViewEvent};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Two-player tic-tac-toe.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
struct Cli {
    /// Display symbol for player one.
    #[arg(long, default_value = "X")]
    player_one: String,

    /// Display symbol for player two.
    #[arg(long, default_value = "O")]
    player_two: String,
}

/// Renders core notifications as text on stdout.
struct ConsoleView {
    symbols: Symbols,
}

impl View for ConsoleView {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::GameStarted { board, restart } => {
                if restart {
                    println!("New game!");
                }
                println!("{}", board.display(&self.symbols));
            }
            Notification::BoardChanged(board) => {
                println!("{}", board.display(&self.symbols));
            }
            Notification::GameEnded(message) => {
                println!("{message}");
                println!("Type `start` to play again.");
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let symbols = Symbols::new(cli.player_one.clone(), cli.player_two.clone());
    let mut controller = GameController::new(ConsoleView { symbols });

    println!("Commands: start | place <row> <col> | quit");
    print_prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Start) => controller.handle(ViewEvent::StartRequested {
                player_one_symbol: cli.player_one.clone(),
                player_two_symbol: cli.player_two.clone(),
            }),
            Some(Command::Place { row, col }) => {
                controller.handle(ViewEvent::CellSelected { row, col })
            }
            Some(Command::Quit) => break,
            None => {
                debug!(input = %line, "unrecognized command");
                println!("Commands: start | place <row> <col> | quit");
            }
        }
        print_prompt()?;
    }

    Ok(())
}

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Place { row: usize, col: usize },
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "start" => Some(Command::Start),
        "place" => {
            let row = words.next()?.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            Some(Command::Place { row, col })
        }
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn print_prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
