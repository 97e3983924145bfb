//! Rules configuration from TOML (`[rules]` section)

use super::{ConfigIssue, ConfigIssueCode};
use crate::rules::DEFAULT_MAX_DEPTH;
use casewise_domain::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw rules configuration from TOML
///
/// ```toml
/// [rules]
/// dir = "./rules"
/// max_depth = 512
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRulesConfig {
    /// Directory holding `<domain>_rules.pl` files; bundled rules when unset
    pub dir: Option<PathBuf>,
    /// Resolution depth limit per query
    pub max_depth: usize,
}

impl Default for FileRulesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FileRulesConfig {
    /// Effective depth limit, falling back to the default when zero
    pub fn parse_max_depth(&self) -> (usize, Vec<ConfigIssue>) {
        if self.max_depth > 0 {
            return (self.max_depth, vec![]);
        }
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidValue {
                field: "rules.max_depth".to_string(),
                value: "0".to_string(),
            },
            message: format!(
                "rules.max_depth: 0 would fail every query, using {}",
                DEFAULT_MAX_DEPTH
            ),
        };
        (DEFAULT_MAX_DEPTH, vec![issue])
    }

    pub(super) fn validate_dir(&self) -> Vec<ConfigIssue> {
        match &self.dir {
            Some(dir) if !dir.is_dir() => vec![ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingPath {
                    field: "rules.dir".to_string(),
                    path: dir.clone(),
                },
                message: format!("rules.dir: {} is not a directory", dir.display()),
            }],
            _ => vec![],
        }
    }
}
