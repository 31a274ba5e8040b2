//! Type-safe status tags for the staging index and working directory.
//!
//! The simulator does not track file contents. Both the index and the working directory are
//! plain `name -> FileStatus` maps that the renderer shows next to the graph.
//!
//! # Public API
//! - [`FileStatus`]: The three states a simulated file can be in

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status tag for a file in the index or working directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// File not yet known to any commit
    New,
    /// File changed relative to HEAD
    Modified,
    /// File removed relative to HEAD
    Deleted,
}

impl FileStatus {
    /// Get the tag used in snapshots and status output
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::New => "new",
            FileStatus::Modified => "modified",
            FileStatus::Deleted => "deleted",
        }
    }

    /// Label used by `git status`, padded like git's own output
    pub fn status_label(&self) -> &'static str {
        match self {
            FileStatus::New => "new file:   ",
            FileStatus::Modified => "modified:   ",
            FileStatus::Deleted => "deleted:    ",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_status_as_str() {
        assert_eq!(FileStatus::New.as_str(), "new");
        assert_eq!(FileStatus::Modified.as_str(), "modified");
        assert_eq!(FileStatus::Deleted.as_str(), "deleted");
    }

    #[test]
    fn test_file_status_display() {
        assert_eq!(format!("{}", FileStatus::Modified), "modified");
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&FileStatus::New).unwrap();
        assert_eq!(json, "\"new\"");
        let parsed: FileStatus = serde_json::from_str("\"deleted\"").unwrap();
        assert_eq!(parsed, FileStatus::Deleted);
    }

    #[test]
    fn test_status_labels_align() {
        let widths: Vec<usize> = [FileStatus::New, FileStatus::Modified, FileStatus::Deleted]
            .iter()
            .map(|s| s.status_label().len())
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
