//! Candidate filtering and suggestion ranking
//!
//! The pipeline re-derives the candidate set from the full dictionary on
//! every change; the ranker orders survivors by letter coverage; a Session
//! ties both to an append-only observation history.

pub mod pipeline;
pub mod ranker;
pub mod session;

pub use pipeline::filter_candidates;
pub use ranker::{suggest, SUGGESTION_LIMIT};
pub use session::{Session, SessionReport};
