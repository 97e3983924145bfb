//! Verdict entity

use crate::core::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// Resolved answer to one legal question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: String,
    pub outcome: bool,
    /// Positive advisory when `outcome` holds, the uniform fallback otherwise
    pub advice: String,
    pub next_steps: Vec<String>,
}

impl Verdict {
    pub fn outcome(&self) -> Outcome {
        Outcome::from(self.outcome)
    }

    /// `"YES"` or `"NO"`
    pub fn result_label(&self) -> &'static str {
        self.outcome().display_label()
    }
}

/// Verdicts for one domain, in query order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainVerdicts {
    pub domain_id: String,
    pub domain_name: String,
    pub verdicts: Vec<Verdict>,
}

impl DomainVerdicts {
    pub fn positive_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.outcome).count()
    }

    pub fn get(&self, label: &str) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.label == label)
    }
}
