//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackTag};

/// Format a feedback row as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    let mut result = String::with_capacity(20); // 4 bytes per emoji
    for &tag in feedback.tags() {
        result.push(match tag {
            FeedbackTag::Green => '🟩',
            FeedbackTag::Yellow => '🟨',
            FeedbackTag::Red => '🟥',
        });
    }
    result
}

/// A horizontal rule of the given width
#[must_use]
pub fn rule(width: usize) -> String {
    "═".repeat(width)
}
