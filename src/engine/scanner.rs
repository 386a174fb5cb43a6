//! # Marker Scanner
//!
//! Finds every checkbox marker of both stage sets in a single line.
//!
//! ## Rules
//! 1. Each marker is searched left to right, leftmost first, without overlap
//! 2. The primary set is scanned before the secondary set
//! 3. Results are ordered by byte offset (stable, so scan order breaks ties)
//! 4. Empty markers are ignored
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{Membership, Occurrence};

/// Scans `line` for every marker in `primary` and `secondary`.
///
/// # Arguments
/// * `line` - The line to scan (never modified)
/// * `primary` - The stage set being cycled
/// * `secondary` - The alternate stage set, recognized but not cycled
///
/// # Returns
/// All occurrences sorted by ascending offset, empty if nothing matched.
///
/// # Example
/// ```
/// use checkcycle::engine::{scan, Membership};
///
/// let found = scan("- [x] a [/] b", &["[ ]", "[x]"], &["[/]"]);
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].membership, Membership::Primary(1));
/// assert_eq!(found[1].membership, Membership::Secondary);
/// ```
pub fn scan<'a, S: AsRef<str>>(
    line: &str,
    primary: &'a [S],
    secondary: &'a [S],
) -> Vec<Occurrence<'a>> {
    let mut occurrences = Vec::new();

    for (index, marker) in primary.iter().enumerate() {
        collect(line, marker.as_ref(), Membership::Primary(index), &mut occurrences);
    }
    for marker in secondary {
        collect(line, marker.as_ref(), Membership::Secondary, &mut occurrences);
    }

    occurrences.sort_by_key(|occurrence| occurrence.offset);
    occurrences
}

fn collect<'a>(
    line: &str,
    marker: &'a str,
    membership: Membership,
    occurrences: &mut Vec<Occurrence<'a>>,
) {
    if marker.is_empty() {
        return;
    }

    occurrences.extend(line.match_indices(marker).map(|(offset, _)| Occurrence {
        offset,
        marker,
        membership,
    }));
}
