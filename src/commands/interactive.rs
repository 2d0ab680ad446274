//! Interactive session mode
//!
//! Text loop collecting one guess/feedback pair per round. `done` ends the
//! stream and reports; `quit`/`exit`/`q` does the same after a goodbye.
//! Invalid input is reported and re-prompted without touching the history.

use crate::core::{Observation, Word};
use crate::filter::{Session, SessionReport};
use crate::output::formatters::feedback_to_emoji;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive loop over the given input stream
///
/// Reading from a generic `BufRead` keeps the loop drivable from tests. EOF
/// behaves like the `done` sentinel. Returns the final session snapshot; the
/// caller decides how to present it.
///
/// # Errors
///
/// Returns an error only on I/O failure reading input or flushing output.
pub fn run_interactive(dictionary: Vec<Word>, input: &mut impl BufRead) -> Result<SessionReport> {
    print_banner();

    let mut session = Session::new(dictionary);

    loop {
        let Some(guess_input) = prompt(input, "Enter guess (or 'done'/'quit')")? else {
            break; // EOF ends the stream
        };
        let guess_input = guess_input.to_lowercase();

        match guess_input.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "done" => break,
            "" => continue,
            _ => {}
        }

        let Some(feedback_input) = prompt(input, "Enter feedback (G/Y/R)")? else {
            break;
        };

        match Observation::validate(&guess_input, &feedback_input) {
            Ok(observation) => {
                let echo = format!(
                    "{} {}",
                    observation.guess().text().to_uppercase(),
                    feedback_to_emoji(observation.feedback())
                );
                let remaining = session.record(observation);
                println!(
                    "{} {echo} - remaining possibilities: {}\n",
                    "✓ Added guess.".green(),
                    remaining.to_string().bright_yellow().bold()
                );
            }
            Err(err) => {
                println!("{} {err}\n", "❌ Error:".red());
            }
        }
    }

    Ok(session.report())
}

fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Sieve - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Instructions:");
    println!("  - Enter your guess (5-letter word)");
    println!("  - Enter feedback: G (green), Y (yellow), R (red)");
    println!("  - Type 'done' when finished entering guesses");
    println!("  - Type 'quit' to exit\n");
    println!("Example:");
    println!("  Guess: crane");
    println!("  Feedback: GYRRR (C is green, R is yellow, rest are red)\n");
}

/// Prompt and read one trimmed line; None on EOF
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn done_without_guesses_reports_empty_history() {
        let mut input = Cursor::new("done\n");
        let report =
            run_interactive(dictionary(&["crane", "crash"]), &mut input).unwrap();

        assert_eq!(report.observations, 0);
        assert_eq!(report.dictionary_len, 2);
    }

    #[test]
    fn eof_behaves_like_done() {
        let mut input = Cursor::new("");
        let report = run_interactive(dictionary(&["crane"]), &mut input).unwrap();

        assert_eq!(report.observations, 0);
    }

    #[test]
    fn one_round_narrows_candidates() {
        let mut input = Cursor::new("crane\nGGGRR\ndone\n");
        let report = run_interactive(
            dictionary(&["crane", "crash", "trace", "brace"]),
            &mut input,
        )
        .unwrap();

        assert_eq!(report.observations, 1);
        assert_eq!(report.survivors, vec!["crash"]);
    }

    #[test]
    fn invalid_input_is_skipped_and_session_continues() {
        let mut input = Cursor::new("toolong\nGGGGG\ncrane\nGGXGG\ncrane\nGGGRR\ndone\n");
        let report = run_interactive(
            dictionary(&["crane", "crash", "trace", "brace"]),
            &mut input,
        )
        .unwrap();

        // Only the final valid round is recorded
        assert_eq!(report.observations, 1);
        assert_eq!(report.survivors, vec!["crash"]);
    }

    #[test]
    fn quit_still_reports_recorded_observations() {
        let mut input = Cursor::new("crane\nGGGRR\nquit\n");
        let report = run_interactive(
            dictionary(&["crane", "crash", "trace", "brace"]),
            &mut input,
        )
        .unwrap();

        assert_eq!(report.observations, 1);
        assert_eq!(report.survivors, vec!["crash"]);
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut input = Cursor::new("CRANE\ngggrr\ndone\n");
        let report = run_interactive(
            dictionary(&["crane", "crash", "trace", "brace"]),
            &mut input,
        )
        .unwrap();

        assert_eq!(report.survivors, vec!["crash"]);
    }
}
