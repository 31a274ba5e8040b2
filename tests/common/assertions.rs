//! Common assertion helpers for test output validation
//!
//! Provides predicates for the CLI output and checks shared by the interpreter tests.

#![allow(dead_code)]

use git_playground::{Outcome, Repository};
use predicates::prelude::*;

/// Creates a predicate that checks for a successful outcome line
pub fn succeeded_with(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✓").and(predicates::str::contains(message.to_string()))
}

/// Creates a predicate that checks for a rejected outcome line
pub fn failed_with(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕").and(predicates::str::contains(message.to_string()))
}

/// Creates a predicate that checks for the uninitialized repository message
pub fn not_initialized() -> impl Predicate<str> {
    predicates::str::contains("Not a git repository")
}

/// Asserts that a rejected command left the repository exactly as it was
pub fn assert_rejected_unchanged(
    before: &Repository,
    after: &Repository,
    outcome: &Outcome,
    message: &str,
) {
    assert!(!outcome.success, "expected failure, got: {}", outcome.message);
    assert_eq!(outcome.message, message);
    assert_eq!(before, after);
}
