//! Git Playground - an in-memory git simulator for teaching.
//!
//! The library interprets textual `git` commands against a simulated repository and
//! computes a deterministic 2D layout of the resulting commit graph for a renderer.
//!
//! # Public API
//! - [`execute`]: `(Repository, command) -> (Repository', Outcome)`, never panics on input
//! - [`layout`]: `Repository -> LayoutAnnotations`, pure and deterministic
//! - [`Session`]: Repository plus history, transcript and persistence
//!
//! # Example
//! ```
//! use git_playground::{execute, layout, Repository};
//!
//! let (repo, outcome) = execute(&Repository::new(), "git init");
//! assert!(outcome.success);
//! let (repo, _) = execute(&repo, "git commit -m \"first change\"");
//! let positions = layout(&repo).unwrap();
//! assert_eq!(positions.commits.len(), 2);
//! ```

pub mod commands;
pub mod core;

pub use commands::{Interpreter, Outcome};
pub use self::core::{
    Branch, Command, CommandParser, Commit, FileStatus, Head, LanePosition, LayoutAnnotations,
    LayoutEngine, LayoutError, PlaygroundConfig, PlaygroundError, Position, Repository,
    ResetMode, Result, Session, TranscriptEntry,
};

/// Run one command line with the default interpreter (author "User", branch "main")
pub fn execute(repository: &Repository, input: &str) -> (Repository, Outcome) {
    Interpreter::default().execute(repository, input)
}

/// Compute the layout of `repository`
///
/// # Errors
/// Only for a corrupt commit graph, see [`LayoutError`].
pub fn layout(repository: &Repository) -> std::result::Result<LayoutAnnotations, LayoutError> {
    LayoutEngine::layout(repository)
}
