//! Letter-coverage suggestion ranking
//!
//! A greedy single-round heuristic: rank surviving candidates by how many
//! other survivors share their letters. It favors guesses that touch letters
//! common across the remaining possibilities; it does not simulate future
//! feedback branches.

use crate::core::Word;

/// Default number of suggestions to return
pub const SUGGESTION_LIMIT: usize = 5;

#[inline]
const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Count, per letter, how many distinct candidate words contain it
///
/// A word contributes at most 1 per distinct letter it holds, so repeated
/// letters within one word never inflate the table.
#[must_use]
pub fn letter_frequency(candidates: &[&Word]) -> [u32; 26] {
    let mut freq = [0u32; 26];

    for word in candidates {
        for letter in word.distinct_letters() {
            freq[letter_index(letter)] += 1;
        }
    }

    freq
}

/// Coverage score: sum of the frequency table over the word's distinct letters
#[must_use]
pub fn coverage_score(word: &Word, freq: &[u32; 26]) -> u32 {
    word.distinct_letters()
        .map(|letter| freq[letter_index(letter)])
        .sum()
}

/// Rank candidates by letter coverage and return the top `limit`
///
/// When `limit` or fewer candidates remain they are returned as-is, unranked:
/// every one is already a plausible next step worth showing. Otherwise words
/// are sorted by descending coverage score; the sort is stable, so ties keep
/// their dictionary order and the result is deterministic.
#[must_use]
pub fn suggest<'a>(candidates: &[&'a Word], limit: usize) -> Vec<&'a Word> {
    if candidates.len() <= limit {
        return candidates.to_vec();
    }

    let freq = letter_frequency(candidates);

    let mut scored: Vec<(u32, &'a Word)> = candidates
        .iter()
        .map(|&word| (coverage_score(word, &freq), word))
        .collect();

    // Stable sort: equal scores keep dictionary order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().take(limit).map(|(_, word)| word).collect()
}
