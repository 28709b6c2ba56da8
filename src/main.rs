//! Adversarial Wordle - CLI
//!
//! Play against an opponent that answers every guess with the feedback that
//! keeps the most words in play.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_adversary::{
    commands::{AutoConfig, evaluate_guess, run_auto, run_play},
    core::Word,
    logging::init_logger,
    output::{print_auto_result, print_round_result},
    wordlists::{
        SUPPORTED_LENGTHS, embedded,
        loader::{load_from_file, of_length, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_adversary",
    about = "Wordle against an adversary that keeps the most words alive",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 3, 4 or 5
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Let the computer play against the adversary
    Auto {
        /// Opening guess (default: TRACE if in the word list, else a random word)
        #[arg(short = 'f', long)]
        first_guess: Option<String>,

        /// Seed for reproducible games
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 20)]
        max_turns: usize,
    },

    /// Evaluate a single guess against the full word list
    Round {
        /// The guess to evaluate
        guess: String,

        /// List every remaining word
        #[arg(long)]
        list: bool,
    },
}

/// Load the corpus for the requested length
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": newline-delimited file, filtered to the requested length
fn load_corpus(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    if !SUPPORTED_LENGTHS.contains(&length) {
        bail!("Unsupported word length {length}, expected one of {SUPPORTED_LENGTHS:?}");
    }

    let words = match wordlist {
        "embedded" => match embedded(length) {
            Some(words) => words_from_slice(words),
            None => bail!("No embedded {length}-letter word list"),
        },
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            of_length(&words, length)
        }
    };

    if words.is_empty() {
        bail!("Word list '{wordlist}' has no {length}-letter words");
    }

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let corpus = load_corpus(&cli.wordlist, cli.length)?;
    log::info!("Loaded {} {}-letter words", corpus.len(), cli.length);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&corpus, cli.length),
        Commands::Auto {
            first_guess,
            seed,
            max_turns,
        } => {
            let config = AutoConfig {
                first_guess,
                seed,
                max_turns,
            };
            let result = run_auto(config, corpus, cli.length)?;
            print_auto_result(&result);
            Ok(())
        }
        Commands::Round { guess, list } => {
            let report = evaluate_guess(&guess, corpus, cli.length)?;
            print_round_result(&report, list);
            Ok(())
        }
    }
}
