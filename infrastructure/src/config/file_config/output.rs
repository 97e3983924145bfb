//! Output configuration from TOML (`[output]` section)

use super::{ConfigIssue, ConfigIssueCode};
use casewise_domain::Severity;
use serde::{Deserialize, Serialize};

/// How verdicts are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Full,
    Json,
}

impl FileOutputFormat {
    const VALID: [&'static str; 2] = ["full", "json"];
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full` or `json`; kept as a string so a typo warns instead of failing
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    pub fn parse_format(&self) -> (FileOutputFormat, Vec<ConfigIssue>) {
        let Some(raw) = &self.format else {
            return (FileOutputFormat::default(), vec![]);
        };
        match raw.trim().to_lowercase().as_str() {
            "full" => (FileOutputFormat::Full, vec![]),
            "json" => (FileOutputFormat::Json, vec![]),
            _ => (
                FileOutputFormat::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: raw.clone(),
                        valid_values: FileOutputFormat::VALID
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    },
                    message: format!(
                        "output.format: unknown value '{}', falling back to 'full'",
                        raw
                    ),
                }],
            ),
        }
    }
}
