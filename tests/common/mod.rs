//! # Test Harness
//!
//! Provides utilities for integration testing checkcycle without affecting user configuration.
//! Uses thread-local storage instead of environment variables to redirect the global config.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use checkcycle::{
    commands::{CycleArgs, CycleOutcome},
    set_home_override, Direction, StageChoice,
};
use tempfile::TempDir;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the project directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/checkcycle/config)
    pub home_dir: TempDir,
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    /// Changes to the project directory for the duration of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let project_dir = TempDir::new().expect("Failed to create temp project dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            home_dir,
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("checkcycle")
            .join("config")
    }

    /// Returns the path where project config would be stored.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_dir.path().join(".checkcycle")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Creates a project config file with the given content.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Writes a Markdown file in the project directory and returns its path.
    pub fn write_note(&self, name: &str, content: &str) -> PathBuf {
        let path = self.project_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write note");
        path
    }

    /// Reads a file in the project directory.
    pub fn read_note(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read note")
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Command Helpers
// =============================================================================

/// Builds quiet cycle arguments for a file line.
pub fn file_args(path: &Path, line: usize, direction: Direction) -> CycleArgs {
    CycleArgs {
        file: Some(path.to_path_buf()),
        line,
        direction,
        choice: StageChoice::Stages,
        stages: vec![],
        quiet: true,
    }
}

/// Runs `next` on a file line and returns the outcome.
pub fn next(path: &Path, line: usize) -> CycleOutcome {
    checkcycle::commands::cycle(&file_args(path, line, Direction::Forward))
        .expect("next should succeed")
}

/// Runs `prev` on a file line and returns the outcome.
pub fn prev(path: &Path, line: usize) -> CycleOutcome {
    checkcycle::commands::cycle(&file_args(path, line, Direction::Backward))
        .expect("prev should succeed")
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Formats a TOML string array.
fn toml_array(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("{item:?}")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Builder for stage config files (global or project; both use the same keys).
#[derive(Default)]
pub struct StageConfigBuilder {
    stages: Option<Vec<&'static str>>,
    alternate_stages: Option<Vec<&'static str>>,
    extra: Vec<String>,
}

impl StageConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stages(mut self, stages: &[&'static str]) -> Self {
        self.stages = Some(stages.to_vec());
        self
    }

    pub fn alternate_stages(mut self, stages: &[&'static str]) -> Self {
        self.alternate_stages = Some(stages.to_vec());
        self
    }

    /// Adds a raw line, e.g. an unknown key.
    pub fn raw(mut self, line: &str) -> Self {
        self.extra.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut lines = Vec::new();
        if let Some(stages) = &self.stages {
            lines.push(format!("stages = {}", toml_array(stages)));
        }
        if let Some(stages) = &self.alternate_stages {
            lines.push(format!("alternate_stages = {}", toml_array(stages)));
        }
        lines.extend(self.extra);
        lines.join("\n") + "\n"
    }
}
