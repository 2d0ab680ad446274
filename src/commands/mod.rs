//! Command implementations

pub mod interactive;
pub mod query;

pub use interactive::run_interactive;
pub use query::{parse_observation_arg, run_query};
