//! Raw input value object
//!
//! Loosely-typed form fields as the user submitted them. All coercion is
//! permissive: a missing or unparsable number becomes zero, a missing
//! categorical value becomes the caller's default literal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The literal a boolean-like field must carry to count as "yes"
pub const YES: &str = "Yes";

/// Unordered field name → string value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    fields: HashMap<String, String>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Exact match against a literal (case-sensitive, untrimmed)
    pub fn equals(&self, name: &str, literal: &str) -> bool {
        self.get(name) == Some(literal)
    }

    /// `true` only when the field is exactly `"Yes"`
    pub fn is_yes(&self, name: &str) -> bool {
        self.equals(name, YES)
    }

    /// Integer value, or `0` when missing, empty or unparsable
    pub fn int_or_zero(&self, name: &str) -> i64 {
        self.get(name)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(0)
    }

    /// Float value, or `0.0` when missing, empty, unparsable or non-finite
    pub fn float_or_zero(&self, name: &str) -> f64 {
        self.get(name)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Trimmed, lowercased categorical value, or `default` when missing or blank
    ///
    /// Forms send yes/no buttons as `"Yes"`/`"No"`, and the rules only match
    /// lowercase atoms.
    pub fn atom_or(&self, name: &str, default: &str) -> String {
        match self.get(name).map(str::trim) {
            Some(v) if !v.is_empty() => v.to_lowercase(),
            _ => default.to_string(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes_is_case_sensitive() {
        let input = RawInput::new()
            .with_field("a", "Yes")
            .with_field("b", "yes")
            .with_field("c", "No");
        assert!(input.is_yes("a"));
        assert!(!input.is_yes("b"));
        assert!(!input.is_yes("c"));
        assert!(!input.is_yes("missing"));
    }

    #[test]
    fn test_int_or_zero() {
        let input: RawInput = [
            ("n", "40"),
            ("padded", " 7 "),
            ("empty", ""),
            ("bad", "forty"),
            ("decimal", "4.5"),
        ]
        .into_iter()
        .collect();

        assert_eq!(input.int_or_zero("n"), 40);
        assert_eq!(input.int_or_zero("padded"), 7);
        assert_eq!(input.int_or_zero("empty"), 0);
        assert_eq!(input.int_or_zero("bad"), 0);
        assert_eq!(input.int_or_zero("decimal"), 0);
        assert_eq!(input.int_or_zero("missing"), 0);
    }

    #[test]
    fn test_float_or_zero() {
        let input: RawInput = [("bac", "0.08"), ("bad", "n/a"), ("inf", "inf")]
            .into_iter()
            .collect();

        assert_eq!(input.float_or_zero("bac"), 0.08);
        assert_eq!(input.float_or_zero("bad"), 0.0);
        assert_eq!(input.float_or_zero("inf"), 0.0);
        assert_eq!(input.float_or_zero("missing"), 0.0);
    }

    #[test]
    fn test_atom_or_default() {
        let input = RawInput::new()
            .with_field("damage", " minor ")
            .with_field("blank", "  ");
        assert_eq!(input.atom_or("damage", "no"), "minor");
        assert_eq!(input.atom_or("blank", "no"), "no");
        assert_eq!(input.atom_or("missing", "yes"), "yes");
    }

    #[test]
    fn test_atom_or_folds_case() {
        let input = RawInput::new()
            .with_field("damage", "No")
            .with_field("helmet", " YES ")
            .with_field("severity", "Minor");
        assert_eq!(input.atom_or("damage", "no"), "no");
        assert_eq!(input.atom_or("helmet", "yes"), "yes");
        assert_eq!(input.atom_or("severity", "no"), "minor");
    }

    #[test]
    fn test_deserialize_flat_json_object() {
        let input: RawInput = serde_json::from_str(r#"{"rent_paid": "Yes"}"#).unwrap();
        assert!(input.is_yes("rent_paid"));
        assert_eq!(input.len(), 1);
    }
}
