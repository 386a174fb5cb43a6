//! # Checkbox Cycle Engine
//!
//! Pure functions that move checkbox markers in a single line of text through
//! an ordered list of stages.
//!
//! A cycle runs in three steps: [`scan`] finds every marker of the primary and
//! secondary stage sets, [`advance`] or [`retreat`] picks the occurrence to
//! change, and the splicer rebuilds the line. Nothing is kept between calls;
//! identical input always produces identical output.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod resolver;
pub mod scanner;
pub mod splice;

use std::fmt;

pub use self::{
    resolver::{advance, retreat},
    scanner::scan,
    splice::replace_at,
};
use crate::error::ConfigError;

/// Which way a cycle moves markers through the stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the last stage ("next")
    Forward,
    /// Toward the first stage ("previous")
    Backward,
}

/// Which stage set a marker was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Found in the primary set at this stage index
    Primary(usize),
    /// Found in the secondary set
    Secondary,
}

/// One marker match within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Byte offset of the match
    pub offset: usize,
    /// The marker text that matched
    pub marker: &'a str,
    /// Set membership and stage index
    pub membership: Membership,
}

impl Occurrence<'_> {
    /// Byte offset just past the match.
    pub const fn end(&self) -> usize {
        self.offset + self.marker.len()
    }
}

/// Scans `line` and cycles it one step in `direction`.
///
/// Returns the line unchanged when there is nothing to do.
///
/// # Example
/// ```
/// use checkcycle::engine::{cycle, Direction};
///
/// let stages = ["[ ]", "[x]"];
/// let alternate = ["[/]", "[?]"];
/// assert_eq!(cycle("- [ ] milk", &stages, &alternate, Direction::Forward), "- [x] milk");
/// ```
pub fn cycle<S: AsRef<str>>(
    line: &str,
    primary: &[S],
    secondary: &[S],
    direction: Direction,
) -> String {
    let occurrences = scan(line, primary, secondary);
    match direction {
        Direction::Forward => advance(&occurrences, primary, line),
        Direction::Backward => retreat(&occurrences, primary, line),
    }
}

/// A validated, ordered list of stage markers.
///
/// Always holds at least one marker and no marker is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet(Vec<String>);

impl MarkerSet {
    /// Validates `markers` for the config key `key`.
    pub fn new(key: &str, markers: Vec<String>) -> Result<Self, ConfigError> {
        if markers.is_empty() {
            return Err(ConfigError::EmptyStages {
                key: key.to_string(),
            });
        }
        if let Some(index) = markers.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyMarker {
                key: key.to_string(),
                index,
            });
        }
        Ok(Self(markers))
    }

    /// The markers in stage order.
    pub fn markers(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// A primary and secondary stage set ready to cycle lines.
#[derive(Debug, Clone)]
pub struct Cycler {
    primary: MarkerSet,
    secondary: MarkerSet,
}

impl Cycler {
    pub const fn new(primary: MarkerSet, secondary: MarkerSet) -> Self {
        Self { primary, secondary }
    }

    /// The set being cycled.
    pub const fn primary(&self) -> &MarkerSet {
        &self.primary
    }

    /// The set whose markers get promoted into the primary set.
    pub const fn secondary(&self) -> &MarkerSet {
        &self.secondary
    }

    /// Cycles `line` one step, returning `None` if the line would not change.
    pub fn apply(&self, line: &str, direction: Direction) -> Option<String> {
        let result = cycle(
            line,
            self.primary.markers(),
            self.secondary.markers(),
            direction,
        );
        (result != line).then_some(result)
    }
}
