//! # Direction Resolvers
//!
//! Decides which occurrence moves, and to which stage, for a forward or
//! backward cycle, and produces the resulting line.
//!
//! Forward walks left to right and moves the first occurrence that is not yet
//! at the last stage. Backward walks right to left and moves the first
//! occurrence that is not at the first stage. Secondary-set occurrences are
//! always eligible and are promoted to the first primary stage. When no
//! occurrence is eligible the whole line wraps around in one pass.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{
    splice::{replace_all, replace_at},
    Membership, Occurrence,
};

/// Advances the first unsaturated occurrence by one stage.
///
/// If every occurrence already sits on the last primary stage, all of them
/// wrap to the first stage instead.
pub fn advance<S: AsRef<str>>(
    occurrences: &[Occurrence<'_>],
    primary: &[S],
    line: &str,
) -> String {
    let (Some(first), Some(last)) = (primary.first(), primary.last()) else {
        return line.to_string();
    };
    if occurrences.is_empty() {
        return line.to_string();
    }

    let last_index = primary.len() - 1;
    let saturated = |occurrence: &Occurrence<'_>| {
        matches!(occurrence.membership, Membership::Primary(index) if index == last_index)
    };

    if occurrences.iter().all(saturated) {
        tracing::trace!(stage = last.as_ref(), "all markers saturated, wrapping");
        return replace_all(line, occurrences, first.as_ref());
    }

    occurrences
        .iter()
        .find(|&occurrence| !saturated(occurrence))
        .map_or_else(
            || line.to_string(),
            |occurrence| {
                let target = match occurrence.membership {
                    Membership::Primary(index) => primary[index + 1].as_ref(),
                    Membership::Secondary => first.as_ref(),
                };
                replace_at(line, occurrence.offset, occurrence.marker.len(), target)
            },
        )
}

/// Retreats the last occurrence that is above the first stage by one stage.
///
/// If every occurrence already sits on the first primary stage, all of them
/// wrap to the last stage instead.
pub fn retreat<S: AsRef<str>>(
    occurrences: &[Occurrence<'_>],
    primary: &[S],
    line: &str,
) -> String {
    let (Some(first), Some(last)) = (primary.first(), primary.last()) else {
        return line.to_string();
    };
    if occurrences.is_empty() {
        return line.to_string();
    }

    let at_start =
        |occurrence: &Occurrence<'_>| occurrence.membership == Membership::Primary(0);

    if occurrences.iter().all(at_start) {
        tracing::trace!(stage = first.as_ref(), "all markers at first stage, wrapping");
        return replace_all(line, occurrences, last.as_ref());
    }

    occurrences
        .iter()
        .rev()
        .find(|&occurrence| !at_start(occurrence))
        .map_or_else(
            || line.to_string(),
            |occurrence| {
                let target = match occurrence.membership {
                    Membership::Primary(index) => primary[index - 1].as_ref(),
                    Membership::Secondary => first.as_ref(),
                };
                replace_at(line, occurrence.offset, occurrence.marker.len(), target)
            },
        )
}
