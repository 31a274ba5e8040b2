use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    repository::{Commit, Repository},
};
use chrono::SecondsFormat;

/// Show every commit reachable from HEAD, each exactly once
pub fn execute_log(repository: &Repository) -> Result<String> {
    ensure_initialized(repository)?;

    let head = repository
        .head_commit_id()
        .ok_or(PlaygroundError::NoCommits)?;

    let entries: Vec<String> = repository
        .history_from(head)
        .into_iter()
        .map(format_log_entry)
        .collect();

    Ok(entries.join("\n"))
}

pub fn format_log_entry(commit: &Commit) -> String {
    format!(
        "commit {}\nAuthor: {}\nDate:   {}\n\n    {}\n",
        commit.id,
        commit.author,
        commit.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        commit.message
    )
}
