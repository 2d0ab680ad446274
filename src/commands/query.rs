//! One-shot query mode
//!
//! Filters the dictionary against observations supplied as command-line
//! `GUESS=FEEDBACK` pairs, e.g. `crane=GYRRR`.

use crate::core::{Observation, Word};
use crate::filter::{Session, SessionReport};
use anyhow::{bail, Context, Result};
use colored::Colorize;

/// Parse one `GUESS=FEEDBACK` argument into an Observation
///
/// # Errors
///
/// Returns an error when the argument lacks the `=` separator or either side
/// fails validation.
///
/// # Examples
/// ```
/// use wordle_sieve::commands::parse_observation_arg;
///
/// let obs = parse_observation_arg("crane=GYRRR").unwrap();
/// assert_eq!(obs.guess().text(), "crane");
///
/// assert!(parse_observation_arg("crane").is_err());
/// assert!(parse_observation_arg("crane=GYR").is_err());
/// ```
pub fn parse_observation_arg(arg: &str) -> Result<Observation> {
    let Some((guess, feedback)) = arg.split_once('=') else {
        bail!("expected GUESS=FEEDBACK, got '{arg}'");
    };

    Observation::validate(guess.trim(), feedback.trim())
        .with_context(|| format!("invalid observation '{arg}'"))
}

/// Run a one-shot query over the given observation arguments
///
/// Prints the remaining candidate count after each observation, mirroring the
/// interactive mode's per-round report.
///
/// # Errors
///
/// Returns an error on the first malformed observation argument; nothing is
/// reported in that case.
pub fn run_query(
    dictionary: Vec<Word>,
    observation_args: &[String],
    suggestion_limit: usize,
) -> Result<SessionReport> {
    let observations: Vec<Observation> = observation_args
        .iter()
        .map(|arg| parse_observation_arg(arg))
        .collect::<Result<_>>()?;

    let mut session = Session::new(dictionary);
    session.set_suggestion_limit(suggestion_limit);

    for observation in observations {
        let guess = observation.guess().text().to_uppercase();
        let feedback = observation.feedback();
        let remaining = session.record(observation);
        println!(
            "{} {guess} {feedback} - {remaining} candidate(s) remain",
            "✓".green()
        );
    }

    Ok(session.report())
}
