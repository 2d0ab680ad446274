//! Cumulative candidate filtering
//!
//! Folds a sequence of observations over the dictionary, keeping only words
//! consistent with all of them. The result is always recomputed from the full
//! dictionary rather than narrowed incrementally, so correctness never
//! depends on evaluation order.

use crate::core::{Observation, Word};
use log::debug;
use rayon::prelude::*;

/// Filter the dictionary down to words consistent with every observation
///
/// Logical AND over the observation list; a word is dropped at its first
/// failing observation. No observations returns the full dictionary. The
/// surviving words keep their dictionary order.
///
/// Each candidate is an independent predicate evaluation over immutable data,
/// so the fold runs in parallel with an order-preserving collect.
#[must_use]
pub fn filter_candidates<'a>(
    dictionary: &'a [Word],
    observations: &[Observation],
) -> Vec<&'a Word> {
    if observations.is_empty() {
        return dictionary.iter().collect();
    }

    let survivors: Vec<&Word> = dictionary
        .par_iter()
        .filter(|candidate| observations.iter().all(|obs| obs.matches(candidate)))
        .collect();

    debug!(
        "filtered {} words to {} with {} observation(s)",
        dictionary.len(),
        survivors.len(),
        observations.len()
    );

    survivors
}
