//! Catalog completeness checks for [`Domain`](super::entities::Domain).
//!
//! Every query label is expected to have an advisory text and next steps for
//! both outcomes. Gaps are reported as issues rather than errors because the
//! verdict resolver already has defined fallbacks for them.

use crate::core::outcome::Outcome;

/// Severity level of a catalog issue.
///
/// Structural problems are rejected by the builder, so every reported issue
/// is non-fatal: resolution falls back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
}

/// Identifies a specific catalog issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssueCode {
    /// A query label has no positive advisory text.
    MissingAdvice { label: String },
    /// A query label has no next-step list for one outcome.
    MissingNextSteps { label: String, outcome: Outcome },
    /// Advisory data exists for a label that no query uses.
    OrphanEntry { label: String },
}

/// A detected issue in a domain definition.
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub code: CatalogIssueCode,
    pub message: String,
}
