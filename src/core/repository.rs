//! The simulated repository: commits, branches, HEAD and the staging stubs.
//!
//! [`Repository`] is the aggregate root that the command handlers mutate. It only grows:
//! commits are appended and never edited, branches are added and re-pointed but never
//! deleted. Mutation goes through a handful of crate-private methods so that HEAD and the
//! cached current branch name can never drift apart.
//!
//! # Public API
//! - [`Commit`]: Immutable node of the history DAG
//! - [`Branch`]: Named pointer to a commit
//! - [`Head`]: Attached (branch) or detached (commit) HEAD reference
//! - [`Repository`]: The aggregate, serde round-trippable as one snapshot value
//!
//! # Ordering
//! Commits and branches are stored in insertion order. Everything that depends on order
//! (prefix resolution, branch listing, layout root discovery) uses that order, so equal
//! repositories always behave identically.

use crate::core::file_status::FileStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Branch created by `git init`
pub const DEFAULT_BRANCH: &str = "main";
/// Author recorded on every commit unless configured otherwise
pub const DEFAULT_AUTHOR: &str = "User";
/// Message of the root commit created by `git init`
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";
/// Number of id characters shown in messages
pub const SHORT_ID_LEN: usize = 7;

/// Abbreviate a commit id for display
pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    /// First parent is the branch that was checked out when the commit was made
    pub parents: Vec<String>,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl Commit {
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub target: String,
}

/// Where HEAD points.
///
/// Serialized as `{"type": "branch", "reference": "main"}` or
/// `{"type": "commit", "reference": "<id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "reference", rename_all = "lowercase")]
pub enum Head {
    Branch(String),
    Commit(String),
}

impl Head {
    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Commit(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    initialized: bool,
    commits: Vec<Commit>,
    branches: Vec<Branch>,
    head: Option<Head>,
    current_branch: Option<String>,
    #[serde(default)]
    index: BTreeMap<String, FileStatus>,
    #[serde(default)]
    working_directory: BTreeMap<String, FileStatus>,
}

impl Repository {
    /// An empty, uninitialized repository
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn head(&self) -> Option<&Head> {
        self.head.as_ref()
    }

    /// Name of the attached branch, `None` when detached or uninitialized
    pub fn current_branch(&self) -> Option<&str> {
        self.current_branch.as_deref()
    }

    pub fn index(&self) -> &BTreeMap<String, FileStatus> {
        &self.index
    }

    pub fn working_directory(&self) -> &BTreeMap<String, FileStatus> {
        &self.working_directory
    }

    /// Look up a commit by its exact id
    pub fn commit(&self, id: &str) -> Option<&Commit> {
        self.commits.iter().find(|commit| commit.id == id)
    }

    /// Resolve a full id or an id prefix.
    ///
    /// An exact match always wins. Otherwise the first commit (in creation order) whose id
    /// starts with `reference` is returned, even if later commits share the prefix.
    pub fn find_commit(&self, reference: &str) -> Option<&Commit> {
        if reference.is_empty() {
            return None;
        }
        self.commit(reference).or_else(|| {
            self.commits
                .iter()
                .find(|commit| commit.id.starts_with(reference))
        })
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.name == name)
    }

    pub fn branch_target(&self, name: &str) -> Option<&str> {
        self.branch(name).map(|branch| branch.target.as_str())
    }

    /// The commit id HEAD resolves to, if that commit exists
    pub fn head_commit_id(&self) -> Option<&str> {
        let id = match self.head.as_ref()? {
            Head::Branch(name) => self.branch_target(name)?,
            Head::Commit(id) => id.as_str(),
        };
        self.commit(id).map(|commit| commit.id.as_str())
    }

    pub fn head_commit(&self) -> Option<&Commit> {
        self.head_commit_id().and_then(|id| self.commit(id))
    }

    /// Commits reachable from HEAD, see [`Repository::history_from`]
    pub fn history(&self) -> Vec<&Commit> {
        match self.head_commit_id() {
            Some(id) => self.history_from(id),
            None => Vec::new(),
        }
    }

    /// Depth-first walk from `start` following every parent, first parent first.
    ///
    /// Each commit is emitted once even when several paths reach it. Unknown ids are skipped.
    pub fn history_from(&self, start: &str) -> Vec<&Commit> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![start];
        let mut history = Vec::new();

        while let Some(id) = stack.pop() {
            if visited.contains(id) {
                continue;
            }
            let Some(commit) = self.commit(id) else {
                continue;
            };
            visited.insert(commit.id.as_str());
            history.push(commit);

            // Reverse so the first parent is popped first
            for parent in commit.parents.iter().rev() {
                if !visited.contains(parent.as_str()) {
                    stack.push(parent.as_str());
                }
            }
        }

        history
    }

    /// Follow first parents `steps` times from HEAD
    pub fn first_parent_ancestor(&self, steps: usize) -> Option<&Commit> {
        let mut commit = self.head_commit()?;
        for _ in 0..steps {
            let parent = commit.parents.first()?;
            commit = self.commit(parent)?;
        }
        Some(commit)
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Append a new commit and return its id.
    ///
    /// Timestamps never go backwards relative to the previous commit, even if the clock does.
    pub(crate) fn create_commit(
        &mut self,
        message: impl Into<String>,
        parents: Vec<String>,
        author: &str,
    ) -> String {
        let message = message.into();
        let now = Utc::now();
        let timestamp = match self.commits.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };
        let id = self.generate_id(&parents, &message, author, &timestamp);

        log::debug!(
            "Creating commit {} with {} parent(s)",
            short_id(&id),
            parents.len()
        );

        self.commits.push(Commit {
            id: id.clone(),
            message,
            parents,
            author: author.to_string(),
            timestamp,
        });
        id
    }

    fn generate_id(
        &self,
        parents: &[String],
        message: &str,
        author: &str,
        timestamp: &DateTime<Utc>,
    ) -> String {
        let mut salt: u64 = 0;
        loop {
            let seed = format!(
                "{}\0{}\0{}\0{}\0{}\0{}",
                self.commits.len(),
                parents.join(","),
                message,
                author,
                timestamp.to_rfc3339(),
                salt
            );
            let id = format!("{:x}", md5::compute(seed.as_bytes()));
            if self.commit(&id).is_none() {
                return id;
            }
            salt += 1;
        }
    }

    pub(crate) fn create_branch(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.branches.push(Branch {
            name: name.into(),
            target: target.into(),
        });
    }

    /// Re-point an existing branch. Returns false if the branch is unknown.
    pub(crate) fn set_branch_target(&mut self, name: &str, target: impl Into<String>) -> bool {
        match self.branches.iter_mut().find(|branch| branch.name == name) {
            Some(branch) => {
                branch.target = target.into();
                true
            }
            None => false,
        }
    }

    pub(crate) fn attach_head(&mut self, branch: impl Into<String>) {
        let branch = branch.into();
        self.current_branch = Some(branch.clone());
        self.head = Some(Head::Branch(branch));
    }

    pub(crate) fn detach_head(&mut self, commit_id: impl Into<String>) {
        self.current_branch = None;
        self.head = Some(Head::Commit(commit_id.into()));
    }

    /// Move whatever HEAD refers to onto `commit_id`.
    ///
    /// Attached: the branch pointer moves and HEAD stays attached. Detached: HEAD itself moves.
    pub(crate) fn advance_head(&mut self, commit_id: &str) {
        match self.head.clone() {
            Some(Head::Branch(name)) => {
                self.set_branch_target(&name, commit_id);
            }
            Some(Head::Commit(_)) | None => self.detach_head(commit_id),
        }
    }
}
