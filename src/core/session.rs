//! A running simulator session and its on-disk snapshot.
//!
//! [`Session`] owns the current [`Repository`], the command history and the transcript
//! (one entry per command, success or failure), and keeps the layout in step with the
//! repository. The whole session serializes to a single JSON value; the layout is not
//! stored because it is always recomputed from the repository.
//!
//! # Public API
//! - [`Session`]: Repository + history + transcript + current layout
//! - [`TranscriptEntry`]: One command and its outcome
//!
//! # Snapshot Strategy
//! - **JSON serialization**: Human-readable snapshots for debugging
//! - **Missing file**: Loads as a fresh, uninitialized session
//! - **Corrupt graph**: Loading fails with the layout's invariant error

use crate::commands::{Interpreter, Outcome};
use crate::core::{
    error::{PlaygroundError, Result},
    layout::{LayoutAnnotations, LayoutEngine},
    repository::Repository,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub command: String,
    pub message: String,
    pub error: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    repository: Repository,
    #[serde(default)]
    history: Vec<String>,
    #[serde(default)]
    transcript: Vec<TranscriptEntry>,
    #[serde(skip)]
    layout: LayoutAnnotations,
    #[serde(skip)]
    interpreter: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configured interpreter (author and default branch) for later commands
    pub fn with_interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Start a session from an existing repository snapshot
    ///
    /// # Errors
    /// Fails if the repository's commit graph cannot be laid out.
    pub fn from_repository(repository: Repository) -> Result<Self> {
        let layout = LayoutEngine::layout(&repository)?;
        Ok(Self {
            repository,
            layout,
            ..Self::default()
        })
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn layout(&self) -> &LayoutAnnotations {
        &self.layout
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Execute one command line.
    ///
    /// The command and exactly one transcript entry are recorded whether or not it succeeds.
    /// On success the repository is replaced and the layout recomputed.
    ///
    /// # Errors
    /// Only a layout invariant violation is returned as `Err`. Rejected commands come back
    /// as `Ok` with an unsuccessful [`Outcome`]. On `Err` the repository and layout are left
    /// untouched and the command is recorded as failed.
    pub fn run(&mut self, input: &str) -> Result<Outcome> {
        let (next, mut outcome) = self.interpreter.execute(&self.repository, input);
        let mut internal = None;

        if outcome.success {
            match LayoutEngine::layout(&next) {
                Ok(layout) => {
                    self.repository = next;
                    self.layout = layout;
                }
                Err(e) => {
                    log::error!("Layout failed after '{}': {e}", input.trim());
                    let error = PlaygroundError::from(e);
                    outcome = Outcome::failure(&error);
                    internal = Some(error);
                }
            }
        }

        self.history.push(input.to_string());
        self.transcript.push(TranscriptEntry {
            command: input.to_string(),
            message: outcome.message.clone(),
            error: !outcome.success,
        });

        match internal {
            Some(error) => Err(error),
            None => Ok(outcome),
        }
    }

    /// Forget everything and go back to an uninitialized repository
    pub fn reset(&mut self) {
        log::info!("Resetting session");
        self.repository = Repository::new();
        self.history.clear();
        self.transcript.clear();
        self.layout = LayoutAnnotations::default();
    }

    /// Load a snapshot, or start fresh when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading session snapshot from {}", path.display());

        if !path.exists() {
            log::debug!("No snapshot at {}, starting fresh", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PlaygroundError::snapshot_read_failed(path, e))?;
        let mut session: Session = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse snapshot '{}': {}", path.display(), e);
            PlaygroundError::snapshot_parse_failed(path, e)
        })?;
        session.layout = LayoutEngine::layout(&session.repository)?;

        log::debug!(
            "Loaded session with {} commit(s) and {} transcript entries",
            session.repository.commits().len(),
            session.transcript.len()
        );
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PlaygroundError::snapshot_write_failed(parent, e))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| PlaygroundError::snapshot_write_failed(path, e))?;

        log::debug!("Saved session snapshot to {}", path.display());
        Ok(())
    }
}
