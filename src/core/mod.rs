//! Core domain types for the candidate sieve
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond hashing. All types here are pure, testable, and have clear mathematical
//! properties.

mod feedback;
mod observation;
mod word;

pub use feedback::{Feedback, FeedbackTag};
pub use observation::{Observation, ValidationError};
pub use word::{Word, WordError};
