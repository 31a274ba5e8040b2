//! Command interpreter: one handler per git verb plus the dispatch table.
//!
//! Handlers take `&mut Repository` and return the success message, or a
//! [`PlaygroundError`] whose text is the failure message. The [`Interpreter`] runs each
//! command against a working copy and only hands it back on success, so a failed command
//! never leaves a half-applied mutation behind.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log_cmd;
pub mod merge;
pub mod reset;
pub mod revert;
pub mod status;

pub use add::*;
pub use branch::*;
pub use checkout::*;
pub use commit::*;
pub use init::*;
pub use log_cmd::*;
pub use merge::*;
pub use reset::*;
pub use revert::*;
pub use status::*;

use crate::core::{
    error::{PlaygroundError, Result},
    parser::{Command, CommandParser},
    repository::{Repository, DEFAULT_AUTHOR, DEFAULT_BRANCH},
};
use serde::{Deserialize, Serialize};

/// Result of one command as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(error: &PlaygroundError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }
}

pub(crate) fn ensure_initialized(repository: &Repository) -> Result<()> {
    if repository.is_initialized() {
        Ok(())
    } else {
        Err(PlaygroundError::NotInitialized)
    }
}

/// Parses command lines and applies them to a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    author: String,
    default_branch: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR, DEFAULT_BRANCH)
    }
}

impl Interpreter {
    pub fn new(author: impl Into<String>, default_branch: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            default_branch: default_branch.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    /// Run `input` against a copy of `repository`.
    ///
    /// Returns the new repository and the outcome. On failure the returned repository is
    /// equal to the input.
    pub fn execute(&self, repository: &Repository, input: &str) -> (Repository, Outcome) {
        let mut working = repository.clone();

        match self.run(&mut working, input) {
            Ok(message) => (working, Outcome::success(message)),
            Err(e) => {
                log::warn!("Rejected '{}': {e}", input.trim());
                (repository.clone(), Outcome::failure(&e))
            }
        }
    }

    /// Like [`Interpreter::execute`], replacing `repository` in place
    pub fn apply(&self, repository: &mut Repository, input: &str) -> Outcome {
        let (next, outcome) = self.execute(repository, input);
        *repository = next;
        outcome
    }

    fn run(&self, repository: &mut Repository, input: &str) -> Result<String> {
        let command = CommandParser::parse(input)?;
        self.dispatch(repository, command)
    }

    /// Apply an already parsed command, mutating `repository` directly
    pub fn dispatch(&self, repository: &mut Repository, command: Command) -> Result<String> {
        log::debug!("Dispatching '{}'", command.verb());

        match command {
            Command::Init => execute_init(repository, &self.default_branch, &self.author),
            Command::Commit { message } => {
                execute_commit(repository, message.as_deref(), &self.author)
            }
            Command::Branch { name } => execute_branch(repository, name.as_deref()),
            Command::Checkout { target, create } => {
                execute_checkout(repository, target.as_deref(), create)
            }
            Command::Merge { branch } => execute_merge(repository, branch.as_deref(), &self.author),
            Command::Add { paths } => execute_add(repository, &paths),
            Command::Status => execute_status(repository),
            Command::Log => execute_log(repository),
            Command::Reset { mode, target } => execute_reset(repository, mode, target.as_deref()),
            Command::Revert { target } => {
                execute_revert(repository, target.as_deref(), &self.author)
            }
        }
    }
}
