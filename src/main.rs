//! Wordle Sieve - CLI
//!
//! Interactive and one-shot candidate filtering over a five-letter dictionary.

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_sieve::{
    commands::{run_interactive, run_query},
    core::Word,
    output::print_session_report,
    wordlists::{
        loader::{load_from_file, words_from_slice},
        WORDS,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Narrow a five-letter dictionary with guess/feedback observations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 584 words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter guesses and feedback one round at a time
    Interactive,

    /// One-shot filtering from GUESS=FEEDBACK pairs (e.g. crane=GYRRR)
    Query {
        /// Observations as GUESS=FEEDBACK
        #[arg(required = true)]
        observations: Vec<String>,

        /// Maximum number of suggested guesses to show
        #[arg(short = 's', long, default_value_t = 5)]
        suggestions: usize,
    },
}

/// Load the dictionary based on the -w flag
///
/// "embedded" uses the compiled-in word list; anything else is treated as a
/// path to a word-per-line file. A dictionary with no valid words is a
/// startup error, not a recoverable one.
fn load_wordlist(mode: &str) -> Result<Vec<Word>> {
    let words = match mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("cannot read wordlist '{path}'"))?,
    };

    ensure!(
        !words.is_empty(),
        "wordlist '{mode}' contains no valid five-letter words"
    );

    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_wordlist(&cli.wordlist)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    let report = match command {
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_interactive(dictionary, &mut input)?
        }
        Commands::Query {
            observations,
            suggestions,
        } => run_query(dictionary, &observations, suggestions)?,
    };

    print_session_report(&report);
    Ok(())
}
