use crate::commands::{branch::create_branch, ensure_initialized};
use crate::core::{
    error::{PlaygroundError, Result},
    repository::{short_id, Repository},
};

/// Switch to a branch, detach at a commit, or create and switch with `-b`
pub fn execute_checkout(
    repository: &mut Repository,
    target: Option<&str>,
    create_branch_flag: bool,
) -> Result<String> {
    ensure_initialized(repository)?;

    if create_branch_flag {
        let name = target.ok_or(PlaygroundError::MissingNewBranchName)?;
        return create_and_checkout_branch(repository, name);
    }

    let target = target.ok_or(PlaygroundError::MissingCheckoutTarget)?;
    checkout_target(repository, target)
}

fn create_and_checkout_branch(repository: &mut Repository, name: &str) -> Result<String> {
    create_branch(repository, name)?;
    repository.attach_head(name);
    Ok(format!("Switched to a new branch '{name}'"))
}

/// Branch names take precedence over commit ids and prefixes
fn checkout_target(repository: &mut Repository, target: &str) -> Result<String> {
    if repository.branch(target).is_some() {
        repository.attach_head(target);
        log::info!("HEAD attached to '{target}'");
        return Ok(format!("Switched to branch '{target}'"));
    }

    let commit_id = repository
        .find_commit(target)
        .map(|commit| commit.id.clone())
        .ok_or_else(|| PlaygroundError::pathspec_not_found(target))?;
    repository.detach_head(commit_id.clone());

    log::info!("HEAD detached at {}", short_id(&commit_id));
    Ok(format!(
        "Note: checking out '{}'.\nYou are in 'detached HEAD' state.",
        short_id(&commit_id)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{branch::execute_branch, init::execute_init};
    use crate::core::repository::Head;

    fn initialized() -> Repository {
        let mut repo = Repository::new();
        execute_init(&mut repo, "main", "User").unwrap();
        repo
    }

    #[test]
    fn test_checkout_branch_attaches_head() -> Result<()> {
        let mut repo = initialized();
        execute_branch(&mut repo, Some("feature"))?;

        let message = execute_checkout(&mut repo, Some("feature"), false)?;
        assert_eq!(message, "Switched to branch 'feature'");
        assert_eq!(repo.head(), Some(&Head::Branch("feature".to_string())));
        assert_eq!(repo.current_branch(), Some("feature"));
        Ok(())
    }

    #[test]
    fn test_checkout_commit_prefix_detaches() -> Result<()> {
        let mut repo = initialized();
        let root = repo.commits()[0].id.clone();

        let message = execute_checkout(&mut repo, Some(&root[..6]), false)?;
        assert!(message.contains("detached HEAD"));
        assert!(message.contains(&root[..7]));
        assert_eq!(repo.head(), Some(&Head::Commit(root)));
        assert_eq!(repo.current_branch(), None);
        Ok(())
    }

    #[test]
    fn test_checkout_unknown_target_fails() {
        let mut repo = initialized();
        let err = execute_checkout(&mut repo, Some("nope"), false).unwrap_err();
        assert!(matches!(err, PlaygroundError::PathspecNotFound { .. }));
    }

    #[test]
    fn test_checkout_without_target() {
        let mut repo = initialized();
        let err = execute_checkout(&mut repo, None, false).unwrap_err();
        assert!(matches!(err, PlaygroundError::MissingCheckoutTarget));
        let err = execute_checkout(&mut repo, None, true).unwrap_err();
        assert!(matches!(err, PlaygroundError::MissingNewBranchName));
    }

    #[test]
    fn test_checkout_create_switches_to_new_branch() -> Result<()> {
        let mut repo = initialized();
        let message = execute_checkout(&mut repo, Some("feature"), true)?;
        assert_eq!(message, "Switched to a new branch 'feature'");
        assert_eq!(repo.current_branch(), Some("feature"));
        Ok(())
    }

    #[test]
    fn test_checkout_create_existing_branch_does_not_switch() {
        let mut repo = initialized();
        let err = execute_checkout(&mut repo, Some("main"), true).unwrap_err();
        assert!(matches!(err, PlaygroundError::BranchExists { .. }));
        assert_eq!(repo.current_branch(), Some("main"));
    }
}
