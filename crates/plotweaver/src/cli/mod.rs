//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the plotweaver binary.

mod characters;
mod commands;
mod context;
mod generate;
mod optimize;

pub use characters::handle_character_command;
pub use commands::{Cli, Commands};
pub use context::AppContext;
pub use generate::generate_story;
pub use optimize::optimize_plot;
