//! Fact normalization domain
//!
//! Turns a [`RawInput`] into a [`FactSet`] using the [`FactSchema`] of the
//! requested legal domain. Facts from other domains never appear in the set.

pub mod entities;
pub mod raw_input;
pub mod schema;

pub use entities::{Fact, FactSet, FactSetBuilder, FactValue, SUBJECT};
pub use raw_input::RawInput;
pub use schema::FactSchema;
