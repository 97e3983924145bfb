//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod diagnostics;
mod output;
mod rules;

pub use diagnostics::FileDiagnosticsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use rules::FileRulesConfig;

use casewise_domain::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a [`ConfigIssue`] is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    InvalidValue {
        field: String,
        value: String,
    },
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    MissingPath {
        field: String,
        path: PathBuf,
    },
}

/// A problem found while validating the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Rule source settings
    pub rules: FileRulesConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic log and facts dump
    pub diagnostics: FileDiagnosticsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// None of these are fatal: every field has a usable fallback.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.rules.parse_max_depth().1);
        issues.extend(self.rules.validate_dir());
        issues.extend(self.output.parse_format().1);
        issues
    }
}
