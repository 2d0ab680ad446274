//! Validated observations and constraint matching
//!
//! An Observation is one accepted (guess, feedback) pair. Construction
//! precomputes the three lookup structures the matcher needs, so deciding
//! whether a candidate word is still possible is a cheap pure predicate.
//!
//! Duplicate letters are the subtle part. Green and yellow tags both assert
//! the letter is present (they differ only in position), so the candidate
//! must contain at least as many copies as were tagged green or yellow. A red
//! tag caps the candidate at exactly that required count: a letter that is
//! red everywhere is absent outright, while a letter green once and red on a
//! second occurrence must appear exactly once.

use super::feedback::{Feedback, FeedbackTag};
use super::word::{Word, WordError};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Error type for rejected guess/feedback input
///
/// Both variants are recoverable at the boundary: the observation is simply
/// not recorded and the session continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BadGuess(WordError),
    BadFeedback,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadGuess(err) => {
                write!(f, "Guess must be a 5-letter word containing only letters ({err})")
            }
            Self::BadFeedback => write!(
                f,
                "Feedback must be 5 characters, each 'G' (green), 'Y' (yellow), or 'R' (red)"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// One validated guess/feedback pair
///
/// Immutable once created; `len(guess) == len(feedback) == 5` by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    guess: Word,
    feedback: Feedback,
    /// Position -> letter for every green tag
    green_positions: Vec<(usize, u8)>,
    /// Letter -> minimum number of copies the candidate must contain
    /// (its occurrences tagged green or yellow)
    required_counts: FxHashMap<u8, u8>,
    /// Letters appearing at any red-tagged position
    red_letters: FxHashSet<u8>,
}

impl Observation {
    /// Validate raw guess and feedback text into an Observation
    ///
    /// The guess must be exactly 5 alphabetic characters (any case) and the
    /// feedback exactly 5 characters from `G`/`Y`/`R` (any case). There is no
    /// partial acceptance: both checks pass or nothing is recorded. Pure, no
    /// side effects.
    ///
    /// # Errors
    /// Returns `ValidationError::BadGuess` when the guess fails its shape
    /// check and `ValidationError::BadFeedback` when the feedback does.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Observation, ValidationError};
    ///
    /// let obs = Observation::validate("Crane", "gyrrr").unwrap();
    /// assert_eq!(obs.guess().text(), "crane");
    ///
    /// assert!(matches!(
    ///     Observation::validate("cranes", "GYRRR"),
    ///     Err(ValidationError::BadGuess(_))
    /// ));
    /// assert!(matches!(
    ///     Observation::validate("crane", "GYRXX"),
    ///     Err(ValidationError::BadFeedback)
    /// ));
    /// ```
    pub fn validate(guess_text: &str, feedback_text: &str) -> Result<Self, ValidationError> {
        let guess = Word::new(guess_text).map_err(ValidationError::BadGuess)?;
        let feedback = Feedback::parse(feedback_text).ok_or(ValidationError::BadFeedback)?;
        Ok(Self::new(guess, feedback))
    }

    /// Create an Observation from already-validated parts
    #[must_use]
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        let mut green_positions = Vec::new();
        let mut required_counts: FxHashMap<u8, u8> = FxHashMap::default();
        let mut red_letters: FxHashSet<u8> = FxHashSet::default();

        for (i, &tag) in feedback.tags().iter().enumerate() {
            let letter = guess.char_at(i);
            match tag {
                FeedbackTag::Green => {
                    green_positions.push((i, letter));
                    *required_counts.entry(letter).or_insert(0) += 1;
                }
                FeedbackTag::Yellow => {
                    *required_counts.entry(letter).or_insert(0) += 1;
                }
                FeedbackTag::Red => {
                    red_letters.insert(letter);
                }
            }
        }

        Self {
            guess,
            feedback,
            green_positions,
            required_counts,
            red_letters,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// The position-aligned feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Decide whether a candidate word is consistent with this observation
    ///
    /// Pure predicate; total over well-formed inputs. The checks run in a
    /// fixed precedence:
    ///
    /// 1. Every green position must hold the guessed letter.
    /// 2. For every green/yellow letter, the candidate must contain at least
    ///    the required number of copies.
    /// 3. A yellow position must not hold the guessed letter there (yellow
    ///    means present but not here).
    /// 4. A red letter caps the candidate at its required count; with no
    ///    green/yellow occurrence that count is zero, so any occurrence
    ///    rejects.
    #[must_use]
    pub fn matches(&self, candidate: &Word) -> bool {
        for &(position, letter) in &self.green_positions {
            if candidate.char_at(position) != letter {
                return false;
            }
        }

        let candidate_counts = candidate.letter_counts();

        for (&letter, &required) in &self.required_counts {
            if candidate_counts.get(&letter).copied().unwrap_or(0) < required {
                return false;
            }
        }

        for (i, &tag) in self.feedback.tags().iter().enumerate() {
            if tag == FeedbackTag::Yellow && candidate.char_at(i) == self.guess.char_at(i) {
                return false;
            }
        }

        for &letter in &self.red_letters {
            let required = self.required_counts.get(&letter).copied().unwrap_or(0);
            if candidate_counts.get(&letter).copied().unwrap_or(0) > required {
                return false;
            }
        }

        true
    }
}
