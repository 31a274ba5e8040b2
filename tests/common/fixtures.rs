//! Predefined repository scenarios
//!
//! Each scenario replays a script of git commands through the interpreter and fails the
//! test setup if any of them is rejected.

#![allow(dead_code)]

use git_playground::{execute, Repository};

/// Replays `commands` on a fresh repository, failing on the first rejected command
pub fn run_script(commands: &[&str]) -> anyhow::Result<Repository> {
    run_script_on(Repository::new(), commands)
}

/// Replays `commands` on top of `repository`
pub fn run_script_on(mut repository: Repository, commands: &[&str]) -> anyhow::Result<Repository> {
    for command in commands {
        let (next, outcome) = execute(&repository, command);
        if !outcome.success {
            anyhow::bail!("'{command}' was rejected: {}", outcome.message);
        }
        repository = next;
    }
    Ok(repository)
}

/// Scenario: freshly initialized repository with only the root commit
pub fn initialized_repo() -> anyhow::Result<Repository> {
    run_script(&["git init"])
}

/// Scenario: one commit on `feature`, which branched from the root commit
pub fn feature_branch_repo() -> anyhow::Result<Repository> {
    run_script(&[
        "git init",
        "git branch feature",
        "git checkout feature",
        "git commit -m \"f1\"",
    ])
}

/// Scenario: `feature` merged back into `main`
pub fn merged_repo() -> anyhow::Result<Repository> {
    run_script_on(
        feature_branch_repo()?,
        &["git checkout main", "git merge feature"],
    )
}

/// Scenario: `main` and `feature` both advanced past the root, then merged
pub fn diamond_repo() -> anyhow::Result<Repository> {
    run_script(&[
        "git init",
        "git checkout -b feature",
        "git commit -m \"feature work\"",
        "git checkout main",
        "git commit -m \"main work\"",
        "git merge feature",
    ])
}

/// Builds a repository straight from its JSON snapshot form
pub fn repository_from_json(value: serde_json::Value) -> anyhow::Result<Repository> {
    Ok(serde_json::from_value(value)?)
}

/// Snapshot form of a commit whose message is `commit <id>`
pub fn commit_json(id: &str, parents: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "message": format!("commit {id}"),
        "parents": parents,
        "author": "User",
        "timestamp": "2024-01-01T00:00:00Z",
    })
}

/// Scenario: ids `abc111`, `abc` and `abc222` all share the prefix `ab`, `main` at `abc222`
pub fn shared_prefix_repo() -> anyhow::Result<Repository> {
    repository_from_json(serde_json::json!({
        "initialized": true,
        "commits": [
            commit_json("abc111", &[]),
            commit_json("abc", &["abc111"]),
            commit_json("abc222", &["abc"]),
        ],
        "branches": [{ "name": "main", "target": "abc222" }],
        "head": { "type": "branch", "reference": "main" },
        "current_branch": "main",
    }))
}

/// Id of the first commit with the given message
pub fn commit_id(repository: &Repository, message: &str) -> anyhow::Result<String> {
    repository
        .commits()
        .iter()
        .find(|commit| commit.message == message)
        .map(|commit| commit.id.clone())
        .ok_or_else(|| anyhow::anyhow!("no commit with message '{message}'"))
}
