//! # Configuration
//!
//! Merged configuration combining global (~/.config/checkcycle/config) and
//! project (.checkcycle) stage lists, plus per-invocation overrides.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod project;

use std::{fmt, path::PathBuf};

use anyhow::Result;

pub use self::{
    global::{set_home_override, ConfigValidation, GlobalConfig},
    project::ProjectConfig,
};
use crate::{
    constants::{ALTERNATE_STAGES_KEY, STAGES_KEY},
    engine::{Cycler, MarkerSet},
    error::ConfigError,
};

/// Which stage list a command cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StageChoice {
    /// Cycle `stages`, promoting `alternate_stages` markers
    #[default]
    Stages,
    /// Cycle `alternate_stages`, promoting `stages` markers
    Alternate,
}

/// Where an effective stage list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSource {
    /// `--stage` on the command line
    CommandLine,
    /// The project's .checkcycle file
    Project(PathBuf),
    /// The global config file
    Global(PathBuf),
    /// Built-in defaults
    Default,
}

impl fmt::Display for StageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::Project(path) | Self::Global(path) => write!(f, "{}", path.display()),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Merged configuration with project settings overriding global
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Project configuration
    pub project: ProjectConfig,

    /// Resolved project root path, if a .checkcycle file was found
    pub project_root: Option<PathBuf>,

    /// Global config file, if one was read
    pub global_path: Option<PathBuf>,

    /// Replacement for the cycled stage list, for one invocation
    pub stage_override: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from both global and project sources.
    ///
    /// Neither file is required; missing files leave the defaults in place.
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;
        let global_path = GlobalConfig::path().filter(|path| path.exists());

        let project_root = ProjectConfig::find_project_root();
        let project = match &project_root {
            Some(root) => ProjectConfig::load(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            global,
            project,
            project_root,
            global_path,
            stage_override: None,
        })
    }

    /// Replaces the cycled stage list for this invocation.
    #[must_use]
    pub fn with_stage_override(mut self, stages: Vec<String>) -> Self {
        if !stages.is_empty() {
            self.stage_override = Some(stages);
        }
        self
    }

    /// Returns the effective primary stages (project overrides global)
    pub fn stages(&self) -> &[String] {
        self.project
            .stages
            .as_deref()
            .unwrap_or(&self.global.stages)
    }

    /// Returns the effective alternate stages (project overrides global)
    pub fn alternate_stages(&self) -> &[String] {
        self.project
            .alternate_stages
            .as_deref()
            .unwrap_or(&self.global.alternate_stages)
    }

    /// Reports where the list for `key` comes from, ignoring command-line overrides.
    pub fn source_of(&self, key: &str) -> StageSource {
        let in_project = match key {
            STAGES_KEY => self.project.stages.is_some(),
            ALTERNATE_STAGES_KEY => self.project.alternate_stages.is_some(),
            _ => false,
        };

        match (&self.project_root, &self.global_path) {
            (Some(root), _) if in_project => StageSource::Project(ProjectConfig::path(root)),
            (_, Some(path)) => StageSource::Global(path.clone()),
            _ => StageSource::Default,
        }
    }

    /// Validates the stage lists and builds a cycler for `choice`.
    ///
    /// A `--stage` override replaces whichever list is being cycled.
    pub fn cycler(&self, choice: StageChoice) -> Result<Cycler, ConfigError> {
        let (primary_key, primary, secondary_key, secondary) = match choice {
            StageChoice::Stages => (
                STAGES_KEY,
                self.stages(),
                ALTERNATE_STAGES_KEY,
                self.alternate_stages(),
            ),
            StageChoice::Alternate => (
                ALTERNATE_STAGES_KEY,
                self.alternate_stages(),
                STAGES_KEY,
                self.stages(),
            ),
        };
        let primary = self.stage_override.as_deref().unwrap_or(primary);

        let cycler = Cycler::new(
            MarkerSet::new(primary_key, primary.to_vec())?,
            MarkerSet::new(secondary_key, secondary.to_vec())?,
        );
        tracing::debug!(
            primary = %cycler.primary(),
            secondary = %cycler.secondary(),
            "resolved stages"
        );
        Ok(cycler)
    }
}
