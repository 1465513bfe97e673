//! Test support utilities for awsenv integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` and a scrubbed set of AWS and
/// awsenv variables, so tests can safely run in parallel and never pick up
/// the developer's credentials.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write a config file into the test directory and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("awsenv.toml");
        std::fs::write(&path, contents).expect("failed to write config");
        path
    }
}
