//! # Line Document
//!
//! Selects a single line of a text buffer by number and splices a replacement
//! back in, leaving every other byte untouched (line terminators included).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::ops::Range;

use anyhow::Result;

/// A text buffer addressed by 1-based line numbers.
#[derive(Debug, Clone)]
pub struct LineDocument {
    text: String,
}

impl LineDocument {
    pub const fn new(text: String) -> Self {
        Self { text }
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the document, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of lines. An empty document has one empty line.
    pub fn line_count(&self) -> usize {
        self.line_ranges().count()
    }

    /// Returns line `number` (1-based) without its terminator.
    pub fn line(&self, number: usize) -> Result<&str> {
        let range = self.range_of(number)?;
        Ok(&self.text[range])
    }

    /// Replaces the content of line `number` (1-based), keeping its terminator.
    pub fn replace_line(&mut self, number: usize, content: &str) -> Result<()> {
        let range = self.range_of(number)?;
        self.text.replace_range(range, content);
        Ok(())
    }

    fn range_of(&self, number: usize) -> Result<Range<usize>> {
        number
            .checked_sub(1)
            .and_then(|index| self.line_ranges().nth(index))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Line {number} is out of range (document has {} lines)",
                    self.line_count()
                )
            })
    }

    /// Byte ranges of each line's content, excluding `\n` or `\r\n`.
    fn line_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let mut start = 0;
        let mut done = false;

        std::iter::from_fn(move || {
            if done {
                return None;
            }
            let rest = &self.text[start..];
            let range = if let Some(newline) = rest.find('\n') {
                let end = start + newline;
                let content_end = if self.text[..end].ends_with('\r') {
                    end - 1
                } else {
                    end
                };
                let range = start..content_end;
                start = end + 1;
                // A trailing newline ends the last line rather than starting a new one
                if start == self.text.len() {
                    done = true;
                }
                range
            } else {
                done = true;
                start..self.text.len()
            };
            Some(range)
        })
    }
}
