//! Valordle - CLI
//!
//! Terminal word-guessing game with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use valordle::{
    commands::{check_word, run_simple},
    config::{DEFAULT_SHARE_FILE, GameConfig, WordListSource},
    game::Game,
    interactive::{App, run_tui},
    output::print_check_result,
    share::FileExporter,
};

#[derive(Parser)]
#[command(
    name = "valordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'default' (embedded) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Fix the random seed so the same solutions come up every run
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File that shared results are written to
    #[arg(long, global = true, default_value = DEFAULT_SHARE_FILE)]
    share_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback for a guess against a given solution
    Check {
        /// The guessed word
        guess: String,

        /// The solution to compare against
        solution: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig {
        wordlist: WordListSource::from_arg(&cli.wordlist),
        seed: cli.seed,
        share_path: cli.share_file,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config),
        Commands::Check { guess, solution } => run_check_command(&guess, &solution),
    }
}

fn run_check_command(guess: &str, solution: &str) -> Result<()> {
    let result = check_word(guess, solution).context("invalid word")?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let words = config.load_words().context("failed to load word list")?;
    log::info!("loaded {} candidate words", words.len());

    let game = Game::new(words, config.rng());
    let app = App::new(game, FileExporter::new(&config.share_path));
    run_tui(app)
}
