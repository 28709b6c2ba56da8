//! Interactive play mode
//!
//! The player types guesses; the adversary answers each one with the
//! feedback that keeps the most words alive.

use crate::core::Word;
use crate::game::GameState;
use crate::output::formatters::word_preview;
use crate::output::print_turn;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// REPL command, always written with a leading ':'
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    List,
    Unknown(String),
}

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Empty,
    Command(Command),
    Guess(String),
}

/// Classify a line of input
///
/// Anything without a leading ':' is a guess, including words such as
/// `LIST` or `NEW`.
fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let Some(name) = line.strip_prefix(':') else {
        return Input::Guess(line.to_string());
    };

    let command = match name.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::New,
        "undo" | "u" => Command::Undo,
        "list" | "l" => Command::List,
        other => Command::Unknown(other.to_string()),
    };
    Input::Command(command)
}

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails, or if
/// the corpus mixes word lengths.
pub fn run_play(corpus: &[Word], word_length: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Adversarial Wordle - Interactive              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'm thinking of a {word_length}-letter word... or rather, of all of them.");
    println!("Every answer I give keeps as many words in play as possible.\n");
    println!("Commands: ':quit' to exit, ':new' for new game, ':undo' to take back a guess,");
    println!("          ':list' to show the remaining words\n");

    let mut game = GameState::new(word_length, corpus.to_vec())?;
    println!(
        "[Computer] I'm starting with {} possible words, good luck\n",
        game.candidate_count()
    );

    loop {
        let guess = match parse_input(&get_user_input("Your guess")?) {
            Input::Empty => continue,
            Input::Guess(guess) => guess,
            Input::Command(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Command(Command::New) => {
                game = GameState::new(word_length, corpus.to_vec())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            Input::Command(Command::Undo) => {
                if game.undo() {
                    println!(
                        "✓ Undone! {} candidates remaining\n",
                        game.candidate_count()
                    );
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            Input::Command(Command::List) => {
                println!("{}\n", word_preview(game.candidates(), 50));
                continue;
            }
            Input::Command(Command::Unknown(name)) => {
                println!("Unknown command ':{name}'\n");
                continue;
            }
        };

        let turn = match game.guess(&guess) {
            Ok(turn) => turn,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        print_turn(game.history().len(), &turn);

        if game.is_won() {
            println!(
                "\n{}",
                format!(
                    "🎉 [Computer] Well played... solved in {} guesses",
                    game.history().len()
                )
                .bright_green()
                .bold()
            );

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game = GameState::new(word_length, corpus.to_vec())?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else if game.candidate_count() == 0 {
            println!("\n❌ No candidates remain! Type ':undo' to go back, or ':new' to start over.\n");
        } else {
            println!(
                "[Computer] I still have {} choices left.\n",
                game.candidate_count()
            );
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    // End of input behaves like ':quit'
    if read == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
