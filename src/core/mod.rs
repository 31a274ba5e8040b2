//! Core functionality for the git-playground simulator.
//!
//! This module provides the repository model, the command parser, the layout engine and
//! the session/persistence layer that the command handlers build on.

pub mod config;
pub mod dirs;
pub mod error;
pub mod file_status;
pub mod layout;
pub mod output;
pub mod parser;
pub mod repository;
pub mod session;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{LayoutError, PlaygroundError, Result};

// === Repository model ===
// Commits, branches, HEAD and the staging stubs
pub use file_status::FileStatus;
pub use repository::{short_id, Branch, Commit, Head, Repository};

// === Command parsing ===
// "git commit -m \"msg\"" -> Command::Commit { message: Some("msg") }
pub use parser::{Command, CommandParser, ResetMode};

// === Layout ===
// Deterministic coordinates for commits, branch labels, HEAD and the fixed nodes
pub use layout::{LanePosition, LayoutAnnotations, LayoutEngine, Position};

// === Session and configuration ===
pub use config::PlaygroundConfig;
pub use session::{Session, TranscriptEntry};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_command, print_error, print_info, print_outcome, print_section_header, print_success,
    print_transcript_entry,
};
