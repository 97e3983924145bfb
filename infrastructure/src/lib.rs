//! Infrastructure layer for casewise
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the in-process rule engine, configuration
//! file loading and diagnostic output.

pub mod config;
pub mod facts_dump;
pub mod gateway;
pub mod logging;
pub mod rules;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileDiagnosticsConfig,
    FileOutputConfig, FileOutputFormat, FileRulesConfig,
};
pub use facts_dump::write_facts;
pub use gateway::{RuleEngineGateway, RuleEngineSession};
pub use logging::JsonlEvaluationLogger;
pub use rules::{BundledRuleLoader, DirectoryRuleLoader, RuleLoadError, RuleSourceLoader};
