//! Domain registry
//!
//! Read-only catalog of legal domains, built once at startup and shared by
//! reference. There is no mutation API after construction.

mod builtin;
pub mod entities;
pub mod validation;

pub use entities::{Domain, DomainBuilder, Query, RuleSource};
pub use validation::{CatalogIssue, CatalogIssueCode, Severity};

use crate::core::error::DomainError;
use crate::facts::{FactSet, RawInput};
use std::collections::HashMap;

/// Immutable catalog of [`Domain`]s keyed by id
///
/// # Example
///
/// ```
/// use casewise_domain::DomainRegistry;
///
/// let registry = DomainRegistry::builtin().unwrap();
/// assert_eq!(registry.lookup("tenant").unwrap().display_name(), "Tenant–Landlord Disputes");
/// assert!(registry.lookup("bankruptcy").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    domains: Vec<Domain>,
    index: HashMap<String, usize>,
}

impl DomainRegistry {
    /// Build a registry from domains, keeping their order for listing
    pub fn new(domains: Vec<Domain>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(domains.len());
        for (i, domain) in domains.iter().enumerate() {
            if index.insert(domain.id().to_string(), i).is_some() {
                return Err(DomainError::DuplicateDomain(domain.id().to_string()));
            }
        }
        Ok(Self { domains, index })
    }

    /// Registry with the six shipped legal domains
    pub fn builtin() -> Result<Self, DomainError> {
        Self::new(builtin::builtin_domains()?)
    }

    pub fn lookup(&self, domain_id: &str) -> Result<&Domain, DomainError> {
        self.index
            .get(domain_id)
            .map(|&i| &self.domains[i])
            .ok_or_else(|| DomainError::DomainNotFound(domain_id.to_string()))
    }

    /// All domains in declaration order
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Normalize raw input for the given domain
    pub fn normalize(&self, domain_id: &str, input: &RawInput) -> Result<FactSet, DomainError> {
        Ok(self.lookup(domain_id)?.normalize(input))
    }

    /// Completeness issues across every domain
    pub fn validate(&self) -> Vec<CatalogIssue> {
        self.domains.iter().flat_map(Domain::validate).collect()
    }
}
