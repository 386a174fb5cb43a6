//! # Text Splicer
//!
//! Replaces a byte range of a line with new text.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Occurrence;

/// Returns `line[..offset] + new_text + line[offset + old_len..]`.
///
/// The range must lie inside `line` on character boundaries. The scanner only
/// ever produces such ranges, so a violation is a bug in the caller and panics.
pub fn replace_at(line: &str, offset: usize, old_len: usize, new_text: &str) -> String {
    let end = offset + old_len;
    assert!(
        end <= line.len() && line.is_char_boundary(offset) && line.is_char_boundary(end),
        "splice range {offset}..{end} is not valid for a line of {} bytes",
        line.len()
    );

    let mut result = String::with_capacity(line.len() - old_len + new_text.len());
    result.push_str(&line[..offset]);
    result.push_str(new_text);
    result.push_str(&line[end..]);
    result
}

/// Replaces every occurrence with `new_text` in a single pass.
///
/// Splices run from the highest offset down so that offsets still waiting to
/// be processed stay valid. An occurrence overlapping a span that was already
/// replaced in this pass is skipped.
pub fn replace_all(line: &str, occurrences: &[Occurrence<'_>], new_text: &str) -> String {
    let mut ordered: Vec<&Occurrence<'_>> = occurrences.iter().collect();
    ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut result = line.to_string();
    // Start of the lowest span replaced so far, in original coordinates
    let mut floor = line.len();

    for occurrence in ordered {
        if occurrence.end() > floor {
            continue;
        }
        result = replace_at(&result, occurrence.offset, occurrence.marker.len(), new_text);
        floor = occurrence.offset;
    }

    result
}
