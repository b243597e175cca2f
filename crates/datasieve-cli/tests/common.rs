//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    payload_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".datasieve");
        let payload_dir = temp_dir.path().join("payloads");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&payload_dir).expect("Failed to create payload dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            payload_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Write a payload file and return its path.
    pub fn write_payload(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.payload_dir.join(name);
        fs::write(&path, contents).expect("Failed to write payload file");
        path
    }

    /// A command pinned to this fixture's data dir, isolated from the
    /// invoking environment.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("datasieve");
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.env_remove("DATASIEVE_PATH");
        cmd.env_remove("DATASIEVE_ENDPOINT");
        cmd
    }
}
