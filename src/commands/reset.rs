use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    parser::ResetMode,
    repository::{short_id, Head, Repository},
};

/// Move the current branch to `target`.
///
/// Only the branch pointer moves. The index and working directory are not modeled, so the
/// mode changes nothing but the reported message.
pub fn execute_reset(
    repository: &mut Repository,
    mode: ResetMode,
    target: Option<&str>,
) -> Result<String> {
    ensure_initialized(repository)?;

    let target = target.ok_or(PlaygroundError::MissingResetTarget)?;
    let branch = match repository.head() {
        Some(Head::Branch(name)) => name.clone(),
        _ => return Err(PlaygroundError::ResetDetached),
    };

    let commit_id = resolve_target(repository, target)?;
    repository.set_branch_target(&branch, commit_id.as_str());

    log::info!("Reset '{branch}' to {} ({mode})", short_id(&commit_id));
    Ok(format!(
        "Reset to {} {}",
        short_id(&commit_id),
        mode_message(mode)
    ))
}

/// Resolve `HEAD`, `HEAD~`, `HEAD~<n>`, `HEAD^`, a full id or an id prefix
fn resolve_target(repository: &Repository, target: &str) -> Result<String> {
    if let Some(steps) = relative_steps(target) {
        if repository.head_commit().is_none() {
            return Err(PlaygroundError::HeadUnresolved);
        }
        return repository
            .first_parent_ancestor(steps)
            .map(|commit| commit.id.clone())
            .ok_or(PlaygroundError::NoParent);
    }

    repository
        .find_commit(target)
        .map(|commit| commit.id.clone())
        .ok_or_else(|| PlaygroundError::commit_not_found(target))
}

/// Number of first-parent steps a HEAD-relative reference asks for
fn relative_steps(reference: &str) -> Option<usize> {
    let suffix = reference.strip_prefix("HEAD")?;
    match suffix {
        "" => Some(0),
        "~" | "^" => Some(1),
        _ => {
            let digits = suffix.strip_prefix('~')?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            digits.parse().ok()
        }
    }
}

pub fn mode_message(mode: ResetMode) -> &'static str {
    match mode {
        ResetMode::Soft => "with --soft: only HEAD was changed",
        ResetMode::Mixed => "with --mixed (default): HEAD and index were changed",
        ResetMode::Hard => "with --hard: HEAD, index and working directory were changed",
    }
}
