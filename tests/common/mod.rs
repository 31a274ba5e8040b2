//! Consolidated test utilities for git-playground
//!
//! This module provides unified testing utilities for integration tests: simulated
//! repositories built from command scripts, and isolated directories for the CLI.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
