//! Verdict resolution
//!
//! Pure mapping from (domain tables, query, outcome) to a [`Verdict`].

use super::entities::Verdict;
use crate::core::outcome::Outcome;
use crate::registry::{Domain, Query};

/// Advisory text for every negative outcome, in every domain.
pub const NOT_SATISFIED_ADVICE: &str = "Conditions for this legal action are not satisfied.";

/// Resolve one query outcome against the domain's advisory tables.
///
/// A positive outcome without an advisory entry resolves to empty advice, and
/// a missing next-step entry resolves to an empty list.
///
/// # Example
///
/// ```
/// use casewise_domain::{DomainRegistry, NOT_SATISFIED_ADVICE, resolve};
///
/// let registry = DomainRegistry::builtin().unwrap();
/// let traffic = registry.lookup("traffic").unwrap();
/// let verdict = resolve(traffic, &traffic.queries()[0], false);
/// assert_eq!(verdict.result_label(), "NO");
/// assert_eq!(verdict.advice, NOT_SATISFIED_ADVICE);
/// ```
pub fn resolve(domain: &Domain, query: &Query, outcome: bool) -> Verdict {
    let advice = if outcome {
        domain.advice(&query.label).unwrap_or_default().to_string()
    } else {
        NOT_SATISFIED_ADVICE.to_string()
    };

    let next_steps = domain
        .next_steps(&query.label, Outcome::from(outcome))
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    Verdict {
        label: query.label.clone(),
        outcome,
        advice,
        next_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FactSchema;
    use crate::registry::DomainRegistry;

    #[test]
    fn test_positive_outcome_uses_label_advice() {
        let registry = DomainRegistry::builtin().unwrap();
        let tenant = registry.lookup("tenant").unwrap();
        let query = &tenant.queries()[0];

        let verdict = resolve(tenant, query, true);
        assert_eq!(verdict.label, "Eviction Invalid");
        assert_eq!(verdict.result_label(), "YES");
        assert!(verdict.advice.starts_with("Eviction cannot proceed"));
        assert_eq!(
            verdict.next_steps,
            vec![
                "Attempt an amicable resolution with landlord (record discussions).",
                "If rejected, consider mediation or a written request through a legal aid clinic.",
            ]
        );
    }

    #[test]
    fn test_negative_outcome_uses_fallback_advice() {
        let registry = DomainRegistry::builtin().unwrap();
        for domain in registry.domains() {
            for query in domain.queries() {
                let verdict = resolve(domain, query, false);
                assert_eq!(verdict.advice, NOT_SATISFIED_ADVICE);
                assert!(!verdict.outcome);
                assert_eq!(
                    Some(verdict.next_steps.as_slice()),
                    domain.next_steps(&query.label, Outcome::No)
                );
            }
        }
    }

    #[test]
    fn test_missing_tables_fall_back_to_empty() {
        let domain = Domain::builder("bare", "Bare", FactSchema::Cyber, "bare.pl")
            .query("Lonely", "lonely")
            .build()
            .unwrap();
        let query = &domain.queries()[0];

        let yes = resolve(&domain, query, true);
        assert_eq!(yes.advice, "");
        assert!(yes.next_steps.is_empty());

        let no = resolve(&domain, query, false);
        assert_eq!(no.advice, NOT_SATISFIED_ADVICE);
        assert!(no.next_steps.is_empty());
    }
}
