//! # Setup Command
//!
//! Creates the global config with documented defaults, or validates and
//! repairs an existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::{ConfigValidation, GlobalConfig},
    ui::print_key_list,
};

/// Executes the setup command.
pub fn execute() -> Result<ConfigValidation> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
        return Ok(ConfigValidation::default());
    }

    let validation = GlobalConfig::update_if_needed()?;

    if validation.has_changes() {
        eprintln!("{} Updated global config: {}", "✓".green(), path.display());
        print_key_list("Added:", &validation.missing);
        print_key_list("Removed:", &validation.invalid);
    } else {
        eprintln!(
            "{} Global config is up to date: {}",
            "✓".green(),
            path.display()
        );
    }

    Ok(validation)
}
