//! Configuration file loading for casewise
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./casewise.toml` or `./.casewise.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/casewise/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileConfig, FileDiagnosticsConfig, FileOutputConfig,
    FileOutputFormat, FileRulesConfig,
};
pub use loader::ConfigLoader;
