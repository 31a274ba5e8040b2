use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    repository::{short_id, Head, Repository},
};

/// Merge `branch` into the checked-out branch.
///
/// Identical commits are a no-op. Anything else produces a merge commit whose parents are
/// `[current, merged]`, even when one side is an ancestor of the other.
pub fn execute_merge(
    repository: &mut Repository,
    branch: Option<&str>,
    author: &str,
) -> Result<String> {
    ensure_initialized(repository)?;

    let source_name = branch.ok_or(PlaygroundError::MissingMergeBranch)?;
    let source = repository
        .branch_target(source_name)
        .ok_or_else(|| PlaygroundError::branch_not_found(source_name))?
        .to_string();

    let target_name = match repository.head() {
        Some(Head::Branch(name)) => name.clone(),
        _ => return Err(PlaygroundError::MergeDetached),
    };
    let target = repository
        .branch_target(&target_name)
        .ok_or(PlaygroundError::HeadUnresolved)?
        .to_string();

    if source == target {
        log::debug!("Merge of '{source_name}' into '{target_name}' is a no-op");
        return Ok("Already up to date.".to_string());
    }

    let message = format!("Merge branch '{source_name}' into {target_name}");
    let merge_id = repository.create_commit(message, vec![target, source], author);
    repository.set_branch_target(&target_name, merge_id.as_str());

    log::info!(
        "Merged '{source_name}' into '{target_name}' as {}",
        short_id(&merge_id)
    );
    Ok(format!("Merged branch '{source_name}' into {target_name}"))
}
