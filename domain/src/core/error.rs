//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested domain id is not in the registry.
    ///
    /// Callers treat this as a routing failure, not an evaluation failure.
    #[error("Unknown legal domain: {0}")]
    DomainNotFound(String),

    #[error("Invalid domain definition '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },

    #[error("Duplicate domain id: {0}")]
    DuplicateDomain(String),
}

impl DomainError {
    pub(crate) fn invalid(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }
}
