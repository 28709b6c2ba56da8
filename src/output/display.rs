//! Display functions for command results

use super::formatters::{colored_guess, word_preview};
use crate::commands::{AutoPlayResult, RoundReport};
use crate::game::Turn;
use colored::Colorize;

/// Print one played turn
pub fn print_turn(number: usize, turn: &Turn) {
    println!(
        "Turn {}: {}  {}  {} → {}",
        number,
        colored_guess(&turn.guess, &turn.feedback),
        turn.feedback,
        turn.candidates_before,
        turn.candidates_after.to_string().bright_yellow()
    );
}

/// Print the result of a single round
pub fn print_round_result(report: &RoundReport, list: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess: {}  {}",
        colored_guess(&report.guess, &report.feedback),
        report.feedback
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "  Candidates: {} → {}",
        report.candidates_before,
        report.remaining.len().to_string().bright_yellow().bold()
    );

    if list {
        println!("  Remaining:  {}", word_preview(&report.remaining, usize::MAX));
    } else if !report.remaining.is_empty() {
        println!("  Remaining:  {}", word_preview(&report.remaining, 10));
    }
}

/// Print the result of an automatic game
pub fn print_auto_result(result: &AutoPlayResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTO PLAY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n[Computer] I'm starting with {} possible words, good luck\n",
        result.starting_candidates
    );

    for (i, turn) in result.turns.iter().enumerate() {
        print_turn(i + 1, turn);
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses", result.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Gave up after {} guesses with {} words left",
                result.turns.len(),
                result.remaining.len()
            )
            .red()
            .bold()
        );
    }
}
