//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Test project context
///
/// Creates a temporary directory the scaffolder runs in and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary working directory
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test context in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// A child path inside the test directory, for assert_fs assertions
    pub fn child(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.dir.child(name)
    }

    /// Create a directory in the test context
    #[allow(dead_code)]
    pub fn create_dir(&self, name: &str) {
        self.dir
            .child(name)
            .create_dir_all()
            .expect("Failed to create directory");
    }

    /// Read a file relative to the test directory
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.dir.child(name).path()).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake `mix` binary standing in for the upstream Nerves generator.
///
/// The script logs its argv and MIX_TARGET, then creates the skeleton the
/// real generator would leave behind (project dir, .gitignore,
/// config/target.exs). Prepend `bin_dir` to PATH when spawning fwforge.
pub struct FakeMix {
    pub root: TempDir,
    pub bin_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeMix {
    pub fn new() -> Self {
        Self::with_exit_code(0)
    }

    /// A fake generator that exits with `code` after logging
    pub fn with_exit_code(code: i32) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake mix");
        let log_file = root.path().join("mix.log");

        let script = root.child("bin/mix");
        let script_content = format!(
            r#"#!/bin/sh
echo "$@ MIX_TARGET=$MIX_TARGET" >> "{log}"

if [ {code} -ne 0 ]; then
    exit {code}
fi

if [ "$1" = "nerves.new" ]; then
    mkdir -p "$2/config"
    printf '_build/\ndeps/\n' > "$2/.gitignore"
    printf 'import Config\n' > "$2/config/target.exs"
fi

exit 0
"#,
            log = log_file.to_string_lossy(),
        );
        script
            .write_str(&script_content)
            .expect("Failed to write mix script");

        let mut perms = fs::metadata(script.path())
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(script.path(), perms).expect("Failed to set permissions");

        let bin_dir = root.path().join("bin");
        Self {
            root,
            bin_dir,
            log_file,
        }
    }

    /// PATH value with the fake binary first
    pub fn path_env(&self) -> String {
        let existing = std::env::var("PATH").unwrap_or_default();
        format!("{}:{existing}", self.bin_dir.display())
    }

    /// Everything the fake generator was invoked with
    pub fn log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

impl Default for FakeMix {
    fn default() -> Self {
        Self::new()
    }
}
