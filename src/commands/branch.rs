use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    repository::Repository,
};

/// `git branch` lists branches, `git branch <name>` creates one at HEAD
pub fn execute_branch(repository: &mut Repository, name: Option<&str>) -> Result<String> {
    ensure_initialized(repository)?;

    match name {
        None => Ok(list_branches(repository)),
        Some(name) => create_branch(repository, name),
    }
}

/// One line per branch in creation order, the current one marked with `*`
pub fn list_branches(repository: &Repository) -> String {
    let current = repository.current_branch();
    let lines: Vec<String> = repository
        .branches()
        .iter()
        .map(|branch| {
            if Some(branch.name.as_str()) == current {
                format!("* {}", branch.name)
            } else {
                format!("  {}", branch.name)
            }
        })
        .collect();

    if lines.is_empty() {
        "No branches found".to_string()
    } else {
        lines.join("\n")
    }
}

/// Create a branch pointing at the commit HEAD resolves to
pub(crate) fn create_branch(repository: &mut Repository, name: &str) -> Result<String> {
    if !is_valid_branch_name(name) {
        return Err(PlaygroundError::invalid_branch_name(name));
    }
    if repository.branch(name).is_some() {
        return Err(PlaygroundError::branch_exists(name));
    }

    let target = repository
        .head_commit_id()
        .ok_or(PlaygroundError::HeadUnresolved)?
        .to_string();
    repository.create_branch(name, target);

    log::info!("Created branch '{name}'");
    Ok(format!("Created branch '{name}'"))
}

/// A reduced form of git's refname rules
pub fn is_valid_branch_name(name: &str) -> bool {
    const FORBIDDEN: &[char] = &['~', '^', ':', '?', '*', '[', '\\', ' '];

    !name.is_empty()
        && name != "HEAD"
        && !name.starts_with('-')
        && !name.starts_with('.')
        && !name.ends_with('/')
        && !name.ends_with(".lock")
        && !name.contains("..")
        && !name.contains("@{")
        && !name.chars().any(|c| c.is_control() || FORBIDDEN.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::execute_init;

    fn initialized() -> Repository {
        let mut repo = Repository::new();
        execute_init(&mut repo, "main", "User").unwrap();
        repo
    }

    #[test]
    fn test_branch_names() {
        assert!(is_valid_branch_name("feature"));
        assert!(is_valid_branch_name("feature/login"));
        assert!(is_valid_branch_name("fix-123"));

        assert!(!is_valid_branch_name(""));
        assert!(!is_valid_branch_name("-d"));
        assert!(!is_valid_branch_name("HEAD"));
        assert!(!is_valid_branch_name("a..b"));
        assert!(!is_valid_branch_name("topic.lock"));
        assert!(!is_valid_branch_name("HEAD~1"));
    }

    #[test]
    fn test_create_branch_points_at_head() -> Result<()> {
        let mut repo = initialized();
        let message = execute_branch(&mut repo, Some("feature"))?;

        assert_eq!(message, "Created branch 'feature'");
        assert_eq!(repo.branch_target("feature"), repo.branch_target("main"));
        assert_eq!(repo.current_branch(), Some("main"));
        Ok(())
    }

    #[test]
    fn test_duplicate_branch_fails() -> Result<()> {
        let mut repo = initialized();
        execute_branch(&mut repo, Some("feature"))?;
        let err = execute_branch(&mut repo, Some("feature")).unwrap_err();
        assert_eq!(err.to_string(), "Branch 'feature' already exists");
        assert_eq!(repo.branches().len(), 2);
        Ok(())
    }

    #[test]
    fn test_list_marks_current_branch() -> Result<()> {
        let mut repo = initialized();
        execute_branch(&mut repo, Some("feature"))?;
        let listing = execute_branch(&mut repo, None)?;
        assert_eq!(listing, "* main\n  feature");
        Ok(())
    }

    #[test]
    fn test_list_when_detached_marks_nothing() -> Result<()> {
        let mut repo = initialized();
        let root = repo.commits()[0].id.clone();
        repo.detach_head(root);
        assert_eq!(list_branches(&repo), "  main");
        Ok(())
    }
}
