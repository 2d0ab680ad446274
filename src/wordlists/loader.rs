//! Word list loading utilities
//!
//! Loads dictionaries from files or converts the embedded constant. Entries
//! that are not valid five-letter words are skipped, not fatal: a custom
//! dictionary degrades gracefully.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines and invalid entries are skipped; a warning is logged with the
/// number of entries dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(&path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(_) => {
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        warn!(
            "skipped {skipped} invalid entries in {}",
            path.as_ref().display()
        );
    }

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::loader::words_from_slice;
/// use wordle_sieve::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
