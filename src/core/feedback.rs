//! Guess feedback representation
//!
//! Feedback marks each position of a guess with one of three tags:
//! - Green: correct letter, correct position
//! - Yellow: letter present elsewhere in the answer
//! - Red: letter not present, beyond any already-accounted occurrences

use std::fmt;

/// Per-position feedback tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTag {
    Green,
    Yellow,
    Red,
}

impl FeedbackTag {
    /// Parse a single tag character, case-insensitively
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' => Some(Self::Green),
            'Y' | 'y' => Some(Self::Yellow),
            'R' | 'r' => Some(Self::Red),
            _ => None,
        }
    }

    /// Canonical uppercase character for this tag
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Red => 'R',
        }
    }
}

/// Feedback for one full guess, position-aligned with its five letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([FeedbackTag; 5]);

impl Feedback {
    /// All greens (the guess was the answer)
    pub const ALL_GREEN: Self = Self([FeedbackTag::Green; 5]);

    /// Create feedback from explicit tags
    #[must_use]
    pub const fn new(tags: [FeedbackTag; 5]) -> Self {
        Self(tags)
    }

    /// Parse feedback from a string like "GYRRR" or "gyrrr"
    ///
    /// Requires exactly 5 characters, each one of `G`/`Y`/`R` in either case.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Feedback;
    ///
    /// let fb = Feedback::parse("GYRRR").unwrap();
    /// assert_eq!(fb, Feedback::parse("gyrrr").unwrap());
    /// assert!(Feedback::parse("GYRX").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut tags = [FeedbackTag::Red; 5];
        for (i, ch) in chars.into_iter().enumerate() {
            tags[i] = FeedbackTag::from_char(ch)?;
        }

        Some(Self(tags))
    }

    /// Get the tags as an array
    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[FeedbackTag; 5] {
        &self.0
    }

    /// Get the tag at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn tag_at(&self, position: usize) -> FeedbackTag {
        self.0[position]
    }

    /// Check whether every position is green
    #[must_use]
    pub fn is_all_green(self) -> bool {
        self.0.iter().all(|&tag| tag == FeedbackTag::Green)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{}", tag.as_char())?;
        }
        Ok(())
    }
}
