//! Verdict domain
//!
//! A verdict pairs a query's boolean outcome with advisory text and next
//! steps. Negative framing is uniform: every `false` outcome carries
//! [`NOT_SATISFIED_ADVICE`].

pub mod entities;
pub mod resolver;

pub use entities::{DomainVerdicts, Verdict};
pub use resolver::{NOT_SATISFIED_ADVICE, resolve};
