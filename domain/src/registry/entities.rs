//! Legal domain entities
//!
//! A [`Domain`] bundles everything needed to answer one area of law: its
//! ordered [`Query`] list, the advisory and next-step tables keyed by query
//! label, the rule source the inference backend loads, and the
//! [`FactSchema`] that normalizes its form input.

use super::validation::{CatalogIssue, CatalogIssueCode, Severity};
use crate::core::error::DomainError;
use crate::core::outcome::Outcome;
use crate::facts::{FactSchema, FactSet, RawInput};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A named legal question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Human-facing title, also the key into the advisory tables
    pub label: String,
    /// Predicate evaluated against the subject, e.g. `eviction_invalid`
    pub predicate: String,
}

impl Query {
    pub fn new(label: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            predicate: predicate.into(),
        }
    }
}

/// Reference to a domain's rule source, e.g. `tenant_rules.pl`
///
/// Opaque to the domain layer; rule loaders decide how to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSource(String);

impl RuleSource {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An independently configured legal subject area (Entity)
#[derive(Debug, Clone)]
pub struct Domain {
    id: String,
    display_name: String,
    queries: Vec<Query>,
    advice: HashMap<String, String>,
    next_steps: HashMap<(String, Outcome), Vec<String>>,
    rule_source: RuleSource,
    schema: FactSchema,
}

impl Domain {
    pub fn builder(
        id: impl Into<String>,
        display_name: impl Into<String>,
        schema: FactSchema,
        rule_source: impl Into<String>,
    ) -> DomainBuilder {
        DomainBuilder {
            id: id.into(),
            display_name: display_name.into(),
            queries: Vec::new(),
            advice: HashMap::new(),
            next_steps: HashMap::new(),
            rule_source: RuleSource::new(rule_source),
            schema,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Queries in presentation order (never empty)
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn rule_source(&self) -> &RuleSource {
        &self.rule_source
    }

    pub fn schema(&self) -> FactSchema {
        self.schema
    }

    /// Positive advisory text for a query label
    pub fn advice(&self, label: &str) -> Option<&str> {
        self.advice.get(label).map(String::as_str)
    }

    /// Next steps for a label and outcome, if any are defined
    pub fn next_steps(&self, label: &str, outcome: Outcome) -> Option<&[String]> {
        self.next_steps
            .get(&(label.to_string(), outcome))
            .map(Vec::as_slice)
    }

    /// Normalize raw form input with this domain's schema
    pub fn normalize(&self, input: &RawInput) -> FactSet {
        self.schema.normalize(input)
    }

    /// Report labels whose advisory or next-step entries are missing.
    ///
    /// Missing entries are not fatal: resolution falls back to defaults.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for query in &self.queries {
            if !self.advice.contains_key(&query.label) {
                issues.push(CatalogIssue {
                    severity: Severity::Warning,
                    code: CatalogIssueCode::MissingAdvice {
                        label: query.label.clone(),
                    },
                    message: format!(
                        "{}: no advisory text for '{}'",
                        self.id, query.label
                    ),
                });
            }
            for outcome in [Outcome::Yes, Outcome::No] {
                if self.next_steps(&query.label, outcome).is_none() {
                    issues.push(CatalogIssue {
                        severity: Severity::Warning,
                        code: CatalogIssueCode::MissingNextSteps {
                            label: query.label.clone(),
                            outcome,
                        },
                        message: format!(
                            "{}: no '{}' next steps for '{}'",
                            self.id, outcome, query.label
                        ),
                    });
                }
            }
        }

        let labels: HashSet<&str> = self.queries.iter().map(|q| q.label.as_str()).collect();
        let mut orphans: Vec<&String> = self
            .advice
            .keys()
            .chain(self.next_steps.keys().map(|(label, _)| label))
            .filter(|label| !labels.contains(label.as_str()))
            .collect();
        orphans.sort();
        orphans.dedup();
        for label in orphans {
            issues.push(CatalogIssue {
                severity: Severity::Warning,
                code: CatalogIssueCode::OrphanEntry {
                    label: label.clone(),
                },
                message: format!("{}: '{}' has advisory data but no query", self.id, label),
            });
        }

        issues
    }
}

/// Builder for [`Domain`]; `build` enforces the structural invariants
#[derive(Debug)]
pub struct DomainBuilder {
    id: String,
    display_name: String,
    queries: Vec<Query>,
    advice: HashMap<String, String>,
    next_steps: HashMap<(String, Outcome), Vec<String>>,
    rule_source: RuleSource,
    schema: FactSchema,
}

impl DomainBuilder {
    pub fn query(mut self, label: impl Into<String>, predicate: impl Into<String>) -> Self {
        self.queries.push(Query::new(label, predicate));
        self
    }

    pub fn advice(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.advice.insert(label.into(), text.into());
        self
    }

    pub fn steps(mut self, label: impl Into<String>, outcome: Outcome, steps: &[&str]) -> Self {
        self.next_steps.insert(
            (label.into(), outcome),
            steps.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    /// Shorthand for the "yes" and "no" step lists of one label
    pub fn steps_both(self, label: &str, yes: &[&str], no: &[&str]) -> Self {
        self.steps(label, Outcome::Yes, yes)
            .steps(label, Outcome::No, no)
    }

    pub fn build(self) -> Result<Domain, DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid(&self.id, "domain id is empty"));
        }
        if self.queries.is_empty() {
            return Err(DomainError::invalid(&self.id, "no queries defined"));
        }

        let mut labels = HashSet::new();
        let mut predicates = HashSet::new();
        for query in &self.queries {
            if query.predicate.trim().is_empty() {
                return Err(DomainError::invalid(
                    &self.id,
                    format!("query '{}' has an empty predicate", query.label),
                ));
            }
            if !labels.insert(query.label.as_str()) {
                return Err(DomainError::invalid(
                    &self.id,
                    format!("duplicate query label '{}'", query.label),
                ));
            }
            if !predicates.insert(query.predicate.as_str()) {
                return Err(DomainError::invalid(
                    &self.id,
                    format!("duplicate predicate '{}'", query.predicate),
                ));
            }
        }

        Ok(Domain {
            id: self.id,
            display_name: self.display_name,
            queries: self.queries,
            advice: self.advice,
            next_steps: self.next_steps,
            rule_source: self.rule_source,
            schema: self.schema,
        })
    }
}
