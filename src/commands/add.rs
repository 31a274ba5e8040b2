use crate::commands::ensure_initialized;
use crate::core::{error::Result, repository::Repository};

/// Accept any pathspec. File contents are not modeled, so nothing is staged.
pub fn execute_add(repository: &mut Repository, paths: &[String]) -> Result<String> {
    ensure_initialized(repository)?;

    log::debug!("Accepted add of {} path(s)", paths.len());
    Ok("Changes staged for commit".to_string())
}
