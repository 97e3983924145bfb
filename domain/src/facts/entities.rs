//! Fact entities: typed assertions about the fixed subject.
//!
//! A [`FactSet`] is built once per evaluation by a domain's
//! [`FactSchema`](super::schema::FactSchema) and handed to the inference
//! backend unchanged. Construction goes through [`FactSetBuilder`], which is
//! append-only; a finished set has no mutation API.

use serde::{Deserialize, Serialize};

/// Every fact is asserted about this subject, as its first argument.
pub const SUBJECT: &str = "user";

/// A typed fact argument (after the subject)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FactValue {
    /// Symbolic constant such as `yes`, `no` or `minor`
    Atom(String),
    Int(i64),
    Float(f64),
}

impl FactValue {
    pub fn atom(value: impl Into<String>) -> Self {
        FactValue::Atom(value.into())
    }
}

impl std::fmt::Display for FactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactValue::Atom(s) => write_atom(f, s),
            FactValue::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" so floats stay floats when re-read
            FactValue::Float(n) => write!(f, "{:?}", n),
        }
    }
}

fn write_atom(f: &mut std::fmt::Formatter<'_>, atom: &str) -> std::fmt::Result {
    let bare = atom
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
        && atom.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        write!(f, "{}", atom)
    } else {
        write!(f, "'{}'", atom.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// A single assertion: `predicate(user, args...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub predicate: String,
    pub args: Vec<FactValue>,
}

impl Fact {
    /// A zero-argument fact such as `rent_paid(user)`
    pub fn flag(predicate: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(predicate: impl Into<String>, arg: FactValue) -> Self {
        Self {
            predicate: predicate.into(),
            args: vec![arg],
        }
    }

    /// Arity including the subject
    pub fn arity(&self) -> usize {
        self.args.len() + 1
    }

    /// Render as a clause terminated by a period
    pub fn to_clause(&self) -> String {
        format!("{}.", self)
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}", self.predicate, SUBJECT)?;
        for arg in &self.args {
            write!(f, ", {}", arg)?;
        }
        write!(f, ")")
    }
}

/// Ordered, immutable collection of facts for one evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactSet {
    facts: Vec<Fact>,
}

impl FactSet {
    pub fn builder() -> FactSetBuilder {
        FactSetBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn as_slice(&self) -> &[Fact] {
        &self.facts
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// First fact with the given predicate name
    pub fn get(&self, predicate: &str) -> Option<&Fact> {
        self.facts.iter().find(|f| f.predicate == predicate)
    }

    /// Render every fact as a clause, one per line
    pub fn to_clauses(&self) -> String {
        let mut out = String::new();
        for fact in &self.facts {
            out.push_str(&fact.to_clause());
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}

/// Append-only builder for [`FactSet`]
#[derive(Debug, Default)]
pub struct FactSetBuilder {
    facts: Vec<Fact>,
}

impl FactSetBuilder {
    pub fn flag(mut self, predicate: &str) -> Self {
        self.facts.push(Fact::flag(predicate));
        self
    }

    /// Assert the flag only when `present` holds
    pub fn flag_if(self, predicate: &str, present: bool) -> Self {
        if present { self.flag(predicate) } else { self }
    }

    pub fn atom(mut self, predicate: &str, value: impl Into<String>) -> Self {
        self.facts
            .push(Fact::with_arg(predicate, FactValue::atom(value)));
        self
    }

    /// Two-valued `yes`/`no` fact
    pub fn yes_no(self, predicate: &str, value: bool) -> Self {
        self.atom(predicate, if value { "yes" } else { "no" })
    }

    pub fn int(mut self, predicate: &str, value: i64) -> Self {
        self.facts
            .push(Fact::with_arg(predicate, FactValue::Int(value)));
        self
    }

    pub fn float(mut self, predicate: &str, value: f64) -> Self {
        self.facts
            .push(Fact::with_arg(predicate, FactValue::Float(value)));
        self
    }

    pub fn build(self) -> FactSet {
        FactSet { facts: self.facts }
    }
}
