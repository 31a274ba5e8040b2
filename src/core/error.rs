//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PlaygroundError`] which covers every way a simulated git command
//! can be rejected, plus the persistence and configuration failures of the surrounding
//! application. The `Display` text of each command variant is exactly the message shown to
//! the user in the transcript.
//!
//! # Public API
//! - [`PlaygroundError`]: Main error enum covering all failure modes
//! - [`LayoutError`]: Internal invariant violations detected by the layout engine
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PlaygroundError>`
//!
//! # Error Categories
//! - **Malformed input**: missing `git` prefix, missing or unsupported verb
//! - **Precondition violations**: not initialized, detached HEAD, duplicate branch
//! - **Reference resolution**: unknown branch, commit or relative reference
//! - **Internal**: layout invariant violations (model corruption, never user error)
//! - **Persistence**: snapshot and config read/write/parse errors

use std::path::PathBuf;
use thiserror::Error;

/// Model corruption found while computing a layout.
///
/// These never come from user input; the append-only construction of the commit graph
/// rules them out, so seeing one means a bug (or a hand-edited snapshot).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Commit {commit} references missing parent {parent}")]
    MissingParent { commit: String, parent: String },

    #[error("Could not place {} commit(s): {}", .commits.len(), .commits.join(", "))]
    Unplaced { commits: Vec<String> },
}

/// Domain-specific error types for git-playground
#[derive(Error, Debug)]
pub enum PlaygroundError {
    // Input errors
    #[error("Command must start with \"git\"")]
    MissingGitPrefix,

    #[error("No git command given")]
    MissingCommand,

    #[error("Git command not supported: \"{verb}\"")]
    UnsupportedCommand { verb: String },

    // Repository state errors
    #[error("Not a git repository (or any of the parent directories)")]
    NotInitialized,

    #[error("Git repository already initialized")]
    AlreadyInitialized,

    #[error("HEAD does not point to a commit")]
    HeadUnresolved,

    #[error("No commits yet")]
    NoCommits,

    // Branch errors
    #[error("Branch '{name}' already exists")]
    BranchExists { name: String },

    #[error("'{name}' is not a valid branch name")]
    InvalidBranchName { name: String },

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    // Checkout errors
    #[error("You must specify a branch name or commit hash")]
    MissingCheckoutTarget,

    #[error("Branch name required after -b flag")]
    MissingNewBranchName,

    #[error("error: pathspec '{target}' did not match any file(s) known to git")]
    PathspecNotFound { target: String },

    // Merge errors
    #[error("You must specify a branch to merge")]
    MissingMergeBranch,

    #[error("Cannot merge in detached HEAD state")]
    MergeDetached,

    // Reset / revert errors
    #[error("You must specify a commit or reference")]
    MissingResetTarget,

    #[error("Cannot reset in detached HEAD state. Checkout a branch first.")]
    ResetDetached,

    #[error("Cannot reset: HEAD has no parent")]
    NoParent,

    #[error("You must specify a commit to revert")]
    MissingRevertTarget,

    #[error("Cannot find commit '{target}'")]
    CommitNotFound { target: String },

    // Internal invariant violations
    #[error("Layout invariant violated: {0}")]
    Layout(#[from] LayoutError),

    // Persistence errors
    #[error("Could not find a configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read session snapshot '{path}': {source}")]
    SnapshotReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write session snapshot '{path}': {source}")]
    SnapshotWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse session snapshot '{path}': {source}")]
    SnapshotParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PlaygroundError
pub type Result<T> = std::result::Result<T, PlaygroundError>;

impl PlaygroundError {
    pub fn unsupported_command(verb: impl Into<String>) -> Self {
        Self::UnsupportedCommand { verb: verb.into() }
    }

    pub fn branch_exists(name: impl Into<String>) -> Self {
        Self::BranchExists { name: name.into() }
    }

    pub fn invalid_branch_name(name: impl Into<String>) -> Self {
        Self::InvalidBranchName { name: name.into() }
    }

    pub fn branch_not_found(name: impl Into<String>) -> Self {
        Self::BranchNotFound { name: name.into() }
    }

    pub fn pathspec_not_found(target: impl Into<String>) -> Self {
        Self::PathspecNotFound {
            target: target.into(),
        }
    }

    pub fn commit_not_found(target: impl Into<String>) -> Self {
        Self::CommitNotFound {
            target: target.into(),
        }
    }

    pub fn snapshot_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SnapshotReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn snapshot_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SnapshotWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn snapshot_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SnapshotParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a bug in graph construction rather than a rejected command
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Layout(_))
    }
}
