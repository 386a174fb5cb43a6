//! # Commands
//!
//! CLI command implementations for checkcycle.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod cycle;
pub mod init;
pub mod setup;
pub mod stages;

pub use self::{
    completions::execute as completions,
    cycle::{execute as cycle, CycleArgs, CycleOutcome},
    init::execute as init,
    setup::execute as setup,
    stages::execute as stages,
};
