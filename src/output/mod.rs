//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_session_report;
pub use formatters::feedback_to_emoji;
