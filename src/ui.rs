//! # UI Utilities
//!
//! Shared terminal output for success messages and warnings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;

/// Prints a success message for a cycled line.
///
/// Format: `✓ {verb} line {number}: {text}`
///
/// Goes to stderr so stdout stays reserved for document output.
pub fn print_success(verb: &str, number: usize, text: &str) {
    eprintln!("{} {} line {}: {}", "✓".green(), verb, number, text);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

/// Prints a titled list of keys, one per line, dimmed.
pub fn print_key_list(title: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    eprintln!("  {}", title.dimmed());
    for key in keys {
        eprintln!("    {key}");
    }
}
