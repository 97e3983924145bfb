//! Presentation layer for casewise
//!
//! This crate contains CLI definitions, raw input collection and
//! output formatters.

pub mod cli;
pub mod config;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, EvaluateArgs, FactsArgs, InputArgs, OutputFormat};
pub use config::OutputConfig;
pub use input::{InputError, collect_raw_input};
pub use output::console::ConsoleFormatter;
