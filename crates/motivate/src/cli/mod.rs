//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the motivate binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{load_config, run_interactive, run_quote, run_visualize};
