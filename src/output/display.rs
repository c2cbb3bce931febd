//! Display functions for the line-based front end

use super::formatters::{
    create_progress_bar, feedback_labels, format_row, paint_tile, win_message,
};
use crate::commands::CheckResult;
use crate::core::{GAME_TITLE, MAX_TURNS};
use crate::game::{GameState, Statistics};
use colored::Colorize;

/// Print the board: every slot plus the guess being composed
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("  {}", GAME_TITLE.to_uppercase().bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for (i, row) in state.rows().iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), format_row(row));
    }

    let hints = state.letter_hints();
    if !hints.is_empty() {
        let keyboard: Vec<String> = ('a'..='z')
            .filter_map(|c| hints.get(&c).map(|&tile| paint_tile(c, Some(tile)).to_string()))
            .collect();
        println!("\n  {}", keyboard.join(""));
    }
    println!();
}

/// Print the result of a one-shot check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = result
        .guess
        .chars()
        .iter()
        .zip(result.feedback.tiles())
        .map(|(&c, &tile)| paint_tile(char::from(c), Some(tile)).to_string())
        .collect();

    println!("\n  {}", tiles.join(" "));
    println!("  {}", result.feedback.to_emoji());
    println!("  {}\n", feedback_labels(result.feedback));

    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the celebration after a win
pub fn print_win(turns: usize) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("  {}", "🎉 Game Over! You guessed the word!".bright_green().bold());
    println!("  {}", win_message(turns).bright_yellow());
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Played:    {}", stats.games_played);
    println!(
        "   Win rate:  {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    if stats.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for turn in 1..=MAX_TURNS {
        let count = stats.guess_distribution[turn];
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {turn}: {} {count}", bar.green());
    }
}
