//! Observation history and session state
//!
//! A Session owns the immutable dictionary and the append-only list of
//! accepted observations. The candidate set is always re-derived from the
//! full dictionary, never patched incrementally, so the surviving set is a
//! pure function of the history.

use super::pipeline::filter_candidates;
use super::ranker::{suggest, SUGGESTION_LIMIT};
use crate::core::{Observation, Word};
use log::debug;

/// One narrowing session: dictionary plus accumulated observations
pub struct Session {
    dictionary: Vec<Word>,
    history: Vec<Observation>,
    suggestion_limit: usize,
}

/// Snapshot of a finished session, ready for presentation
///
/// Survivors are sorted alphabetically; suggestions are present only when
/// more survivors remain than the suggestion limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub dictionary_len: usize,
    pub observations: usize,
    pub survivors: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Session {
    /// Create a session over the given dictionary
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        Self {
            dictionary,
            history: Vec::new(),
            suggestion_limit: SUGGESTION_LIMIT,
        }
    }

    /// Override how many suggestions a report may carry
    pub fn set_suggestion_limit(&mut self, limit: usize) {
        self.suggestion_limit = limit;
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Number of observations accepted so far
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.history.len()
    }

    /// Append an accepted observation and return the new candidate count
    ///
    /// The candidate set is recomputed from the full dictionary against the
    /// whole history.
    pub fn record(&mut self, observation: Observation) -> usize {
        debug!(
            "recording observation: {} / {}",
            observation.guess(),
            observation.feedback()
        );
        self.history.push(observation);
        self.candidates().len()
    }

    /// Words still consistent with every recorded observation, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        filter_candidates(&self.dictionary, &self.history)
    }

    /// Top coverage-ranked follow-up guesses among the current candidates
    #[must_use]
    pub fn suggestions(&self) -> Vec<&Word> {
        let candidates = self.candidates();
        suggest(&candidates, self.suggestion_limit)
    }

    /// Produce the final presentation snapshot
    #[must_use]
    pub fn report(&self) -> SessionReport {
        let candidates = self.candidates();

        let mut survivors: Vec<String> =
            candidates.iter().map(|w| w.text().to_string()).collect();
        survivors.sort();

        let suggestions = if candidates.len() > self.suggestion_limit {
            suggest(&candidates, self.suggestion_limit)
                .into_iter()
                .map(|w| w.text().to_string())
                .collect()
        } else {
            Vec::new()
        };

        SessionReport {
            dictionary_len: self.dictionary.len(),
            observations: self.history.len(),
            survivors,
            suggestions,
        }
    }
}
