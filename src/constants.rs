//! # Constants
//!
//! Centralized constants for magic values used throughout checkcycle.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Stages
// =============================================================================

/// Default primary stages: unchecked, checked.
pub const DEFAULT_STAGES: &[&str] = &["[ ]", "[x]"];

/// Default alternate stages: in progress, question.
pub const DEFAULT_ALTERNATE_STAGES: &[&str] = &["[/]", "[?]"];

/// Config key for the primary stage list.
pub const STAGES_KEY: &str = "stages";

/// Config key for the alternate stage list.
pub const ALTERNATE_STAGES_KEY: &str = "alternate_stages";

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "checkcycle";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

/// Project configuration file name, searched upward from the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".checkcycle";

// =============================================================================
// Document
// =============================================================================

/// Line selected when none is given.
pub const DEFAULT_LINE: usize = 1;
