//! Domain layer for casewise
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Legal Domains
//!
//! A [`Domain`] is an independently configured area of law (tenancy,
//! consumer rights, traffic offences, ...) with its own questions, advisory
//! text and next steps. The [`DomainRegistry`] holds the shipped catalog.
//!
//! ## Facts
//!
//! Raw form input ([`RawInput`]) is normalized by the domain's
//! [`FactSchema`] into a [`FactSet`]: typed assertions about the fixed
//! subject `user`, consumed by an inference backend.
//!
//! ## Verdicts
//!
//! Each query's yes/no outcome is [`resolve`]d into a [`Verdict`].

pub mod core;
pub mod facts;
pub mod registry;
pub mod verdict;

// Re-export commonly used types
pub use core::{error::DomainError, outcome::Outcome};
pub use facts::{Fact, FactSchema, FactSet, FactSetBuilder, FactValue, RawInput, SUBJECT};
pub use registry::{
    CatalogIssue, CatalogIssueCode, Domain, DomainBuilder, DomainRegistry, Query, RuleSource,
    Severity,
};
pub use verdict::{DomainVerdicts, NOT_SATISFIED_ADVICE, Verdict, resolve};
