//! # Init Command
//!
//! Writes a .checkcycle project file in the current directory, seeded with
//! the stage lists currently in effect.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::env;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::{Config, ProjectConfig};

/// Executes the init command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let project_root = env::current_dir().context("Cannot get current directory")?;

    let config_path = ProjectConfig::path(&project_root);
    if config_path.exists() {
        anyhow::bail!(
            "Project already initialized (found {})",
            config_path.display()
        );
    }

    let project_config = ProjectConfig {
        stages: Some(config.stages().to_vec()),
        alternate_stages: Some(config.alternate_stages().to_vec()),
    };
    project_config.save(&project_root)?;

    println!("{} Initialized checkcycle project", "✓".green());
    println!("  {} {}", "Config:".dimmed(), config_path.display());

    Ok(())
}
