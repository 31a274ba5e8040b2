use crate::core::{
    error::{PlaygroundError, Result},
    repository::{Repository, INITIAL_COMMIT_MESSAGE},
};

/// Create the root commit and the default branch, with HEAD attached to it
pub fn execute_init(repository: &mut Repository, default_branch: &str, author: &str) -> Result<String> {
    if repository.is_initialized() {
        return Err(PlaygroundError::AlreadyInitialized);
    }

    let root = repository.create_commit(INITIAL_COMMIT_MESSAGE, Vec::new(), author);
    repository.create_branch(default_branch, root);
    repository.attach_head(default_branch);
    repository.mark_initialized();

    log::info!("Initialized repository on branch '{default_branch}'");
    Ok("Initialized empty Git repository".to_string())
}
