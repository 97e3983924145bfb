//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`outcome::Outcome`] - the yes/no result of a legal question

pub mod error;
pub mod outcome;
