//! Display functions for session results

use super::formatters::rule;
use crate::filter::SessionReport;
use colored::Colorize;

/// Print the final session report
///
/// Shows the sorted list of surviving words and, when more survive than the
/// suggestion limit, the coverage-ranked follow-up guesses.
pub fn print_session_report(report: &SessionReport) {
    if report.observations == 0 {
        println!(
            "\n📊 No guesses provided. Total words in dictionary: {}",
            report.dictionary_len
        );
        return;
    }

    println!("\n{}", rule(60).cyan());
    println!(" {} ", "RESULTS".bright_cyan().bold());
    println!("{}", rule(60).cyan());

    if report.survivors.is_empty() {
        println!("\n{}", "❌ No words match the given constraints.".red());
        println!("   Check your feedback entries for errors.");
    } else {
        println!(
            "\n{} Found {} possible word(s):\n",
            "✓".green(),
            report.survivors.len()
        );

        for (i, word) in report.survivors.iter().enumerate() {
            println!(
                "  {:2}. {}",
                i + 1,
                word.to_uppercase().bright_white().bold()
            );
        }

        if !report.suggestions.is_empty() {
            println!(
                "\n💡 {}",
                "Suggested next guesses (best letter coverage):".bright_cyan()
            );
            for word in &report.suggestions {
                println!("  → {}", word.to_uppercase().bright_yellow());
            }
        }
    }

    println!("\n{}", rule(60).cyan());
}
