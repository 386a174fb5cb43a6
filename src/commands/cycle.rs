//! # Next/Prev Commands
//!
//! Cycles the checkbox markers on one line of a file (in place) or of stdin
//! (written to stdout).
//!
//! In filter mode stdout always carries the whole document, unchanged when
//! nothing could be cycled or something failed, and stderr stays silent
//! except for errors. Editors that merge the two streams should discard
//! stderr (`:.!cbx next 2>/dev/null` in vim).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    config::{Config, StageChoice},
    document::LineDocument,
    engine::{Cycler, Direction},
    ui,
};

/// Arguments for the next and prev commands
#[derive(Debug, Clone)]
pub struct CycleArgs {
    /// File to edit in place; stdin/stdout when `None`
    pub file: Option<PathBuf>,
    /// 1-based line number
    pub line: usize,
    pub direction: Direction,
    pub choice: StageChoice,
    /// Replaces the cycled stage list when non-empty
    pub stages: Vec<String>,
    /// Suppress the success message and warnings
    pub quiet: bool,
}

/// What happened to the selected line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The line was rewritten to this text
    Changed(String),
    /// No marker on the line, or cycling would not change it
    Unchanged,
}

/// Executes the next or prev command.
pub fn execute(args: &CycleArgs) -> Result<CycleOutcome> {
    match &args.file {
        Some(path) => cycle_file(&load_cycler(args)?, path, args),
        None => cycle_stdin(args),
    }
}

fn load_cycler(args: &CycleArgs) -> Result<Cycler> {
    let config = Config::load()?.with_stage_override(args.stages.clone());
    config
        .cycler(args.choice)
        .context("Invalid stage configuration")
}

fn cycle_file(cycler: &Cycler, path: &Path, args: &CycleArgs) -> Result<CycleOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut document = LineDocument::new(content);

    let outcome = cycle_line(cycler, &mut document, args)?;

    match &outcome {
        CycleOutcome::Changed(text) => {
            fs::write(path, document.into_text())
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), line = args.line, "wrote file");
            if !args.quiet {
                ui::print_success(verb(args.direction), args.line, text);
            }
        }
        CycleOutcome::Unchanged if !args.quiet => warn_unchanged(args.line),
        CycleOutcome::Unchanged => {}
    }

    Ok(outcome)
}

fn cycle_stdin(args: &CycleArgs) -> Result<CycleOutcome> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    let mut document = LineDocument::new(content);

    // The document is only touched on success, so a failure echoes the input
    let outcome =
        load_cycler(args).and_then(|cycler| cycle_line(&cycler, &mut document, args));

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(document.into_text().as_bytes())
        .context("Failed to write stdout")?;
    stdout.flush()?;

    outcome
}

/// Cycles line `args.line` of `document` in place.
pub fn cycle_line(
    cycler: &Cycler,
    document: &mut LineDocument,
    args: &CycleArgs,
) -> Result<CycleOutcome> {
    let line = document.line(args.line)?;

    let Some(updated) = cycler.apply(line, args.direction) else {
        tracing::debug!(line = args.line, "nothing to cycle");
        return Ok(CycleOutcome::Unchanged);
    };

    tracing::debug!(line = args.line, from = line, to = %updated, "cycled line");
    document.replace_line(args.line, &updated)?;
    Ok(CycleOutcome::Changed(updated))
}

fn warn_unchanged(line: usize) {
    ui::print_warnings(&[format!("no checkbox marker on line {line}")]);
}

const fn verb(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "Advanced",
        Direction::Backward => "Retreated",
    }
}
