//! Outcome value object

use serde::{Deserialize, Serialize};

/// Yes/no outcome of a legal question (Value Object)
///
/// Used as the key into a domain's next-step table.
///
/// # Example
///
/// ```
/// use casewise_domain::Outcome;
///
/// assert_eq!(Outcome::from(true), Outcome::Yes);
/// assert_eq!(Outcome::No.as_str(), "no");
/// assert_eq!(Outcome::Yes.display_label(), "YES");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Yes => "yes",
            Outcome::No => "no",
        }
    }

    /// Upper-case label shown next to a verdict
    pub fn display_label(&self) -> &'static str {
        match self {
            Outcome::Yes => "YES",
            Outcome::No => "NO",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Outcome::Yes)
    }
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        if value { Outcome::Yes } else { Outcome::No }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "true" => Ok(Outcome::Yes),
            "no" | "false" => Ok(Outcome::No),
            _ => Err(format!("Unknown outcome: {}. Valid: yes, no", s)),
        }
    }
}
