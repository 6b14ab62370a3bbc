//! Test support utilities for understudy integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// No process-global state is mutated — child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    ///
    /// Sets up temporary directories for project and home.
    /// Does NOT change the process working directory — child commands
    /// use `.current_dir()` for isolation instead.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with a scaffolded project.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize project: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with a scaffolded project and seeded roles.
    ///
    /// Roles are written straight into the config document plus a storage
    /// stub on disk; recording a real login needs a browser.
    pub fn with_roles(roles: &[&str]) -> Self {
        let t = Self::init();
        t.write_config(&fixtures::config_with_roles(roles));
        for role in roles {
            t.seed_storage(role);
        }
        t
    }

    /// Overwrite the config document directly.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".understudy.toml"), contents)
            .expect("failed to write config");
    }

    /// Create a storage-state stub for a role.
    pub fn seed_storage(&self, role: &str) {
        let auth = self.dir.path().join(".auth");
        std::fs::create_dir_all(&auth).expect("failed to create auth dir");
        std::fs::write(auth.join(format!("{}.json", role)), "{\"cookies\":[]}")
            .expect("failed to write storage stub");
    }

    /// Path of a file inside the test project.
    pub fn project_path(&self, rel: &str) -> std::path::PathBuf {
        self.dir.path().join(rel)
    }

    /// Read a file inside the test project.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.project_path(rel))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", rel, e))
    }
}
