use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    repository::{short_id, Repository},
};

/// Record a commit that undoes `target`, on top of HEAD.
///
/// Contents are not modeled, so the new commit only carries the `Revert "..."` message.
pub fn execute_revert(
    repository: &mut Repository,
    target: Option<&str>,
    author: &str,
) -> Result<String> {
    ensure_initialized(repository)?;

    let target = target.ok_or(PlaygroundError::MissingRevertTarget)?;
    let (reverted_id, reverted_message) = repository
        .find_commit(target)
        .map(|commit| (commit.id.clone(), commit.message.clone()))
        .ok_or_else(|| PlaygroundError::commit_not_found(target))?;

    let current = repository
        .head_commit_id()
        .ok_or(PlaygroundError::HeadUnresolved)?
        .to_string();

    let revert_id = repository.create_commit(
        format!("Revert \"{reverted_message}\""),
        vec![current],
        author,
    );
    repository.advance_head(&revert_id);

    log::info!(
        "Reverted {} as {}",
        short_id(&reverted_id),
        short_id(&revert_id)
    );
    Ok(format!(
        "Created revert commit: {}\nReverted commit {}: {}",
        short_id(&revert_id),
        short_id(&reverted_id),
        reverted_message
    ))
}
