// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers for tests that work on real files.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding one environment file and a destination path.
pub struct EnvFixture {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
    /// Path of the written environment file
    pub source: PathBuf,
    /// Path the YAML output should go to (not created)
    pub dest: PathBuf,
}

impl EnvFixture {
    /// Writes `content` to `.env.local` in a fresh temporary directory.
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let source = dir.path().join(".env.local");
        let dest = dir.path().join("env.yaml");
        fs::write(&source, content).expect("write env file");
        Self { dir, source, dest }
    }

    /// Reads the destination file back.
    #[allow(dead_code)]
    pub fn output(&self) -> String {
        fs::read_to_string(&self.dest).expect("read output file")
    }
}
