//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.checkcycle` in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::PROJECT_CONFIG_FILE;

/// Project configuration stored at .checkcycle in project root.
///
/// Every key is optional; unset keys fall through to the global config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Primary stages override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<String>>,

    /// Alternate stages override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_stages: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Finds the project root by searching for .checkcycle upward from the current directory
    pub fn find_project_root() -> Option<PathBuf> {
        let current = env::current_dir().ok()?;
        Self::find_project_root_from(&current)
    }

    /// Finds the project root by searching for .checkcycle upward from `start`
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .checkcycle in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded project config");
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Saves the project config to .checkcycle
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let content = toml::to_string_pretty(self).context("Failed to serialize project config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))
    }
}
