//! Diagnostics configuration from TOML (`[diagnostics]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw diagnostics configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiagnosticsConfig {
    /// JSONL file receiving one line per evaluation event
    pub log_file: Option<PathBuf>,
    /// File the normalized facts are written to before evaluation
    pub facts_dump: Option<PathBuf>,
}
