//! Wordle Sieve
//!
//! Narrows a fixed dictionary of five-letter words to the subset consistent
//! with a sequence of guess/feedback observations, and proposes follow-up
//! guesses ranked by letter coverage.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::{Observation, Word};
//! use wordle_sieve::filter::filter_candidates;
//!
//! let dictionary = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("crash").unwrap(),
//!     Word::new("trace").unwrap(),
//! ];
//!
//! // CRANE came back green/green/green/red/red
//! let obs = Observation::validate("crane", "GGGRR").unwrap();
//! let survivors = filter_candidates(&dictionary, &[obs]);
//!
//! assert_eq!(survivors.len(), 1);
//! assert_eq!(survivors[0].text(), "crash");
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
