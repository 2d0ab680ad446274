//! Word lists for the candidate sieve
//!
//! Provides the embedded default dictionary compiled into the binary plus a
//! loader for custom word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
