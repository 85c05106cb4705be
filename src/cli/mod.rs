//! CLI layer for BarBuddy.
//!
//! Provides the command-line interface using clap, with commands for
//! initializing, browsing, editing, seeding, and importing recipes.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
