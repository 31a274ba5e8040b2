use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    repository::{short_id, Repository},
};

/// Message used when `-m` is missing or has no value
pub const DEFAULT_COMMIT_MESSAGE: &str = "Empty commit message";

/// Record a new commit on top of whatever HEAD resolves to.
///
/// Attached HEAD advances its branch; detached HEAD moves by itself and no branch changes.
pub fn execute_commit(
    repository: &mut Repository,
    message: Option<&str>,
    author: &str,
) -> Result<String> {
    ensure_initialized(repository)?;

    let parent = repository
        .head_commit_id()
        .ok_or(PlaygroundError::HeadUnresolved)?
        .to_string();
    let message = message.unwrap_or(DEFAULT_COMMIT_MESSAGE);

    let id = repository.create_commit(message, vec![parent], author);
    repository.advance_head(&id);

    log::info!("Committed {} on {:?}", short_id(&id), repository.current_branch());
    Ok(format!("[{}] {}", short_id(&id), message))
}
