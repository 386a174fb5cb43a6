//! # Stages Command
//!
//! Shows the effective stage lists and where each one is configured.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    config::{Config, StageChoice},
    constants::{ALTERNATE_STAGES_KEY, STAGES_KEY},
};

/// Executes the stages command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let cycler = config
        .cycler(StageChoice::Stages)
        .context("Invalid stage configuration")?;

    for (key, set) in [
        (STAGES_KEY, cycler.primary()),
        (ALTERNATE_STAGES_KEY, cycler.secondary()),
    ] {
        println!(
            "{key:<18}{set}  {}",
            format!("({})", config.source_of(key)).dimmed()
        );
    }

    Ok(())
}
