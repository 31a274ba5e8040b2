//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Every git command produces exactly one outcome; this module prints it in the same shape
//! for `run`, `repl` and the replayed transcript.
//!
//! # Design Principles
//! - **Consistent color scheme**: Green for success, red for errors, blue for commands
//! - **Multi-line messages**: Continuation lines are indented under the first one

use crate::commands::Outcome;
use crate::core::session::TranscriptEntry;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Echo the command line as typed
pub fn print_command(command: &str) {
    println!("{} {}", "$".bright_black(), command.blue());
}

/// Indent every line after the first so multi-line output stays aligned with the marker
pub fn indent_continuation(message: &str) -> String {
    message.lines().collect::<Vec<_>>().join("\n  ")
}

pub fn print_outcome(outcome: &Outcome) {
    let message = indent_continuation(&outcome.message);
    if outcome.success {
        println!("{} {}", "✓".green(), message);
    } else {
        println!("{} {}", "✕".red(), message.red());
    }
}

pub fn print_transcript_entry(entry: &TranscriptEntry) {
    print_command(&entry.command);
    print_outcome(&Outcome {
        success: !entry.error,
        message: entry.message.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_functions_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Transcript");
        print_command("git status");
    }

    #[test]
    fn test_print_outcome_does_not_panic() {
        print_outcome(&Outcome::success("On branch main\nNo changes to commit"));
        print_outcome(&Outcome {
            success: false,
            message: "Branch 'x' not found".to_string(),
        });
    }

    #[test]
    fn test_indent_continuation() {
        assert_eq!(indent_continuation("one"), "one");
        assert_eq!(indent_continuation("one\ntwo"), "one\n  two");
        assert_eq!(indent_continuation(""), "");
    }
}
