//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/checkcycle/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ALTERNATE_STAGES_KEY, DEFAULT_ALTERNATE_STAGES, DEFAULT_STAGES, GLOBAL_CONFIG_DIR,
    GLOBAL_CONFIG_FILENAME, STAGES_KEY,
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &[STAGES_KEY, ALTERNATE_STAGES_KEY];

/// Fields that should always be present with actual values.
const REQUIRED_FIELDS: &[&str] = &[STAGES_KEY, ALTERNATE_STAGES_KEY];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/checkcycle/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Primary stages, cycled by `next`/`prev`
    #[serde(default = "default_stages")]
    pub stages: Vec<String>,

    /// Alternate stages, cycled with `--alt` and promoted otherwise
    #[serde(default = "default_alternate_stages")]
    pub alternate_stages: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            alternate_stages: default_alternate_stages(),
        }
    }
}

fn default_stages() -> Vec<String> {
    DEFAULT_STAGES.iter().map(ToString::to_string).collect()
}

fn default_alternate_stages() -> Vec<String> {
    DEFAULT_ALTERNATE_STAGES
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/checkcycle/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/checkcycle)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            tracing::debug!("no home directory, using default stages");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no global config, using default stages");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded global config");
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with a comment block explaining every option.
    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        let stages_line = format!("{STAGES_KEY} = {}", toml_list(&config.stages));
        let alternate_line = format!(
            "{ALTERNATE_STAGES_KEY} = {}",
            toml_list(&config.alternate_stages)
        );

        let content = format!(
            r#"# checkcycle Global Configuration
# Location: ~/.config/checkcycle/config
# A .checkcycle file in a project overrides any of these keys.

# Stages cycled by `cbx next` and `cbx prev`, in order.
# `next` moves the leftmost marker that is not yet on the last stage;
# when every marker on the line is on the last stage they all wrap to the first.
# Default: ["[ ]", "[x]"]
{stages_line}

# Alternate stages, cycled with `--alt`.
# Markers from this list are also recognized by `next`/`prev` and are
# promoted to the first entry of `stages`.
# Default: ["[/]", "[?]"]
{alternate_line}
"#
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// This parses the raw TOML to detect:
    /// - Unknown fields that should be removed
    /// - Missing fields
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Global config not found");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        let invalid = table
            .keys()
            .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect();

        let missing = REQUIRED_FIELDS
            .iter()
            .filter(|field| !table.contains_key(**field))
            .map(ToString::to_string)
            .collect();

        Ok(ConfigValidation { missing, invalid })
    }

    /// Validates and rewrites the global config file if needed.
    ///
    /// Loading lets serde fill defaults for missing keys; re-saving drops
    /// unknown ones.
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let validation = Self::validate()?;

        if !validation.has_changes() {
            return Ok(validation);
        }

        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        let config = Self::load()?;
        Self::save_with_comments(&path, &config)?;
        tracing::debug!(path = %path.display(), "rewrote global config");

        Ok(validation)
    }
}

/// Formats a list of strings as an inline TOML array.
fn toml_list(items: &[String]) -> String {
    let values: Vec<String> = items
        .iter()
        .map(|item| toml::Value::String(item.clone()).to_string())
        .collect();
    format!("[{}]", values.join(", "))
}
