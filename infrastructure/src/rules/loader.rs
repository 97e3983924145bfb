//! Rule source loading
//!
//! The six domain rule files ship inside the binary. A rules directory can be
//! configured to override them, e.g. while iterating on a rule file.

use casewise_domain::RuleSource;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RuleLoadError {
    #[error("No rule source named {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves a [`RuleSource`] reference to rule text
pub trait RuleSourceLoader: Send + Sync {
    fn load(&self, source: &RuleSource) -> Result<String, RuleLoadError>;
}

const BUNDLED: &[(&str, &str)] = &[
    ("tenant_rules.pl", include_str!("../../rules/tenant_rules.pl")),
    ("consumer_rules.pl", include_str!("../../rules/consumer_rules.pl")),
    ("contract_rules.pl", include_str!("../../rules/contract_rules.pl")),
    ("traffic_rules.pl", include_str!("../../rules/traffic_rules.pl")),
    ("cyber_rules.pl", include_str!("../../rules/cyber_rules.pl")),
    ("employment_rules.pl", include_str!("../../rules/employment_rules.pl")),
];

/// Rule files compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledRuleLoader;

impl BundledRuleLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }
}

impl RuleSourceLoader for BundledRuleLoader {
    fn load(&self, source: &RuleSource) -> Result<String, RuleLoadError> {
        BUNDLED
            .iter()
            .find(|(name, _)| *name == source.as_str())
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| RuleLoadError::NotFound(source.to_string()))
    }
}

/// Reads `<dir>/<rule source>` from disk
#[derive(Debug, Clone)]
pub struct DirectoryRuleLoader {
    dir: PathBuf,
}

impl DirectoryRuleLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RuleSourceLoader for DirectoryRuleLoader {
    fn load(&self, source: &RuleSource) -> Result<String, RuleLoadError> {
        let path = self.dir.join(source.as_str());
        debug!("Loading rule source from {}", path.display());
        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RuleLoadError::NotFound(path.display().to_string())
            } else {
                RuleLoadError::Io { path, source: e }
            }
        })
    }
}
