//! # checkcycle
//!
//! Cycles Markdown checkbox markers (`[ ]`, `[x]`, `[/]`, `[?]`, ...) on a
//! single line through configurable stages.
//!
//! ## Features
//!
//! - **Pure engine**: scan, decide, splice; no state between calls
//! - **Two stage sets**: markers from the alternate set are promoted into the cycled set
//! - **Layered config**: global `~/.config/checkcycle/config`, per-project `.checkcycle`
//! - **Editor friendly**: edit a file line in place or filter stdin to stdout
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod document;
pub mod engine;
pub mod error;
pub mod ui;

pub use config::{set_home_override, Config, StageChoice};
pub use document::LineDocument;
pub use engine::{cycle, Cycler, Direction, MarkerSet};
pub use error::ConfigError;
