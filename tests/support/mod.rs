//! Test support utilities for lockbox integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own store directory and home directory. Child
/// processes receive everything through environment variables, so tests
/// can run in parallel.
pub struct Test {
    /// Directory holding the store file
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a vault initialized under
    /// [`PASSPHRASE`].
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize vault: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment holding `entries`
    /// (service, username, password).
    pub fn with_entries(entries: &[(&str, &str, &str)]) -> Self {
        let t = Self::init();
        for (service, username, password) in entries {
            let output = t.add(service, username, password);
            assert!(
                output.status.success(),
                "Failed to add {}: {}",
                service,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the store file used by [`Test::cmd`].
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("vault.toml")
    }

    /// Raw store file contents.
    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_path()).expect("failed to read store")
    }
}
