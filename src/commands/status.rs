use crate::commands::ensure_initialized;
use crate::core::{
    error::{PlaygroundError, Result},
    file_status::FileStatus,
    repository::{short_id, Head, Repository},
};
use std::collections::BTreeMap;

/// Report where HEAD is and list the simulated index and working directory
pub fn execute_status(repository: &Repository) -> Result<String> {
    ensure_initialized(repository)?;

    let mut lines = vec![match repository.head() {
        Some(Head::Branch(name)) => format!("On branch {name}"),
        Some(Head::Commit(id)) => format!("HEAD detached at {}", short_id(id)),
        None => return Err(PlaygroundError::HeadUnresolved),
    }];

    if repository.index().is_empty() && repository.working_directory().is_empty() {
        lines.push("No changes to commit".to_string());
        return Ok(lines.join("\n"));
    }

    push_section(&mut lines, "Changes to be committed:", repository.index());
    push_section(
        &mut lines,
        "Changes not staged for commit:",
        repository.working_directory(),
    );

    Ok(lines.join("\n"))
}

fn push_section(lines: &mut Vec<String>, header: &str, files: &BTreeMap<String, FileStatus>) {
    if files.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(header.to_string());
    for (name, status) in files {
        lines.push(format!("        {}{}", status.status_label(), name));
    }
}
