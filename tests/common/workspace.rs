//! Isolated directories for running the binary
//!
//! Every CLI test gets its own config and data directories so nothing touches the real
//! session snapshot of the user running the tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The TempDir must be kept alive for the duration of the test to prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub state_path: PathBuf,
}

impl TestWorkspace {
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// The binary, pointed at this workspace's config and data directories
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("git-playground")?;
        cmd.env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("XDG_DATA_HOME", self.temp_dir.path().join("data"))
            .env("HOME", self.temp_dir.path())
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    /// Like [`TestWorkspace::command`], with an explicit `--state` snapshot
    pub fn command_with_state(&self) -> anyhow::Result<Command> {
        let mut cmd = self.command()?;
        cmd.arg("--state").arg(&self.state_path);
        Ok(cmd)
    }
}

pub fn setup_workspace() -> anyhow::Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let state_path = temp_dir.path().join("snapshots").join("session.json");
    Ok(TestWorkspace {
        temp_dir,
        state_path,
    })
}
