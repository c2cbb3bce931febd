//! Simple line-based game mode
//!
//! Text-based game without the TUI: one whole guess per line.

use crate::config::GameConfig;
use crate::core::{MAX_TURNS, Word};
use crate::game::{Event, Game, Transition};
use crate::output::{print_board, print_statistics, print_win};
use crate::share::{Exporter, FileExporter, export_results};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, Write};

/// What a line of input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    Restarted,
    Stats,
    /// Export result message, success or failure
    Exported(Result<String, String>),
    Played(Transition),
    /// Input rejected at the boundary, with a hint for the player
    Rejected(String),
}

/// Interpret one line of player input
///
/// Commands are `new`, `export`, `statistics` and `quit`; anything else must
/// be a five-letter word and is fed to the game as typed letters plus a
/// submit. No command is five letters long, so every word can be guessed.
pub fn handle_line<R: Rng, E: Exporter + ?Sized>(
    game: &mut Game<R>,
    line: &str,
    exporter: &mut E,
) -> LineOutcome {
    let input = line.trim().to_lowercase();

    match input.as_str() {
        "quit" | "q" | "exit" => LineOutcome::Quit,
        "new" | "n" => {
            game.handle(Event::Restart);
            LineOutcome::Restarted
        }
        "statistics" | ":stats" => LineOutcome::Stats,
        "export" => LineOutcome::Exported(export_results(game.state(), exporter)),
        _ if game.state().is_over() => {
            LineOutcome::Rejected("Game over! Type 'new' to play again.".to_string())
        }
        _ if game.state().next_slot().is_none() => LineOutcome::Rejected(format!(
            "All {MAX_TURNS} guesses used. Type 'new' to start over."
        )),
        word => match Word::new(word) {
            Ok(word) => LineOutcome::Played(game.handle_all(Event::word(word.text()))),
            Err(err) => LineOutcome::Rejected(format!("❌ {err}")),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or reading stdin fails.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let words = config.load_words().context("failed to load word list")?;
    let mut game = Game::new(words, config.rng());
    let mut exporter = FileExporter::new(&config.share_path);

    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Valordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {MAX_TURNS} tries.");
    println!("Commands: 'new' for a new game, 'export' to save results,");
    println!("          'statistics' for session stats, 'quit' to exit");

    print_board(game.state());

    loop {
        let Some(line) = get_user_input("Guess")? else {
            break;
        };

        match handle_line(&mut game, &line, &mut exporter) {
            LineOutcome::Quit => break,
            LineOutcome::Restarted => {
                println!("\n🔄 New game started!");
                print_board(game.state());
            }
            LineOutcome::Stats => print_statistics(game.stats()),
            LineOutcome::Exported(Ok(message) | Err(message)) => println!("{message}\n"),
            LineOutcome::Played(transition) => {
                print_board(game.state());
                if let Transition::Won { turns } = transition {
                    print_win(turns);
                    println!("Type 'new' to play again or 'export' to save your result.\n");
                }
            }
            LineOutcome::Rejected(message) => println!("{message}\n"),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
