//! # Errors
//!
//! Configuration errors raised while turning stage lists into marker sets.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// A stage list that cannot be used for cycling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("'{key}' must contain at least one stage")]
    EmptyStages { key: String },

    #[error("'{key}' entry {index} is an empty string")]
    EmptyMarker { key: String, index: usize },
}
