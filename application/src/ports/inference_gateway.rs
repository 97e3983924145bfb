//! Inference Gateway port
//!
//! Defines the interface for loading a domain's rules plus a fact set into
//! an inference backend and asking it yes/no questions.

use async_trait::async_trait;
use casewise_domain::{Domain, FactSet};
use thiserror::Error;

/// Errors that can occur during inference gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The rule source could not be read or parsed. Fatal for the domain.
    #[error("Rule source '{rule_source}' could not be loaded: {reason}")]
    RuleLoadFailure { rule_source: String, reason: String },

    /// The backend faulted while answering one query.
    #[error("Query '{predicate}' failed: {reason}")]
    QueryFailed { predicate: String, reason: String },
}

impl GatewayError {
    pub fn rule_load(rule_source: impl Into<String>, reason: impl Into<String>) -> Self {
        GatewayError::RuleLoadFailure {
            rule_source: rule_source.into(),
            reason: reason.into(),
        }
    }

    pub fn query_failed(predicate: impl Into<String>, reason: impl Into<String>) -> Self {
        GatewayError::QueryFailed {
            predicate: predicate.into(),
            reason: reason.into(),
        }
    }
}

/// Gateway to an inference backend
///
/// This port defines how the application layer talks to a rule engine.
/// Implementations (adapters) live in the infrastructure layer. Each call to
/// [`prepare`](InferenceGateway::prepare) must return an isolated session:
/// sessions are never shared between evaluations.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Load the domain's rule source and the facts into a fresh session
    async fn prepare(
        &self,
        domain: &Domain,
        facts: &FactSet,
    ) -> Result<Box<dyn InferenceSession>, GatewayError>;
}

/// A loaded rule set plus facts, scoped to one evaluation
#[async_trait]
pub trait InferenceSession: Send + Sync {
    /// Whether `predicate(user)` is derivable.
    ///
    /// Underivable is `Ok(false)`; `Err` means the backend faulted.
    async fn evaluate(&self, predicate: &str) -> Result<bool, GatewayError>;
}
