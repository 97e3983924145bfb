//! Rule engine inference gateway
//!
//! Adapter from the [`InferenceGateway`] port to the in-process rule engine.
//! Each `prepare` builds a fresh knowledge base from the domain's rule source
//! plus the normalized facts, so sessions never share state.

use crate::rules::{
    BundledRuleLoader, DEFAULT_MAX_DEPTH, Goal, KnowledgeBase, RuleSourceLoader, Term,
    parse_program,
};
use async_trait::async_trait;
use casewise_application::ports::inference_gateway::{
    GatewayError, InferenceGateway, InferenceSession,
};
use casewise_domain::{Domain, FactSet, SUBJECT};
use std::sync::Arc;
use tracing::{debug, trace};

/// Inference gateway backed by the built-in Horn-clause interpreter
pub struct RuleEngineGateway {
    loader: Arc<dyn RuleSourceLoader>,
    max_depth: usize,
}

impl RuleEngineGateway {
    pub fn new(loader: Arc<dyn RuleSourceLoader>) -> Self {
        Self {
            loader,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Gateway serving the rule files compiled into the binary
    pub fn bundled() -> Self {
        Self::new(Arc::new(BundledRuleLoader::new()))
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[async_trait]
impl InferenceGateway for RuleEngineGateway {
    async fn prepare(
        &self,
        domain: &Domain,
        facts: &FactSet,
    ) -> Result<Box<dyn InferenceSession>, GatewayError> {
        let source = domain.rule_source();
        let text = self
            .loader
            .load(source)
            .map_err(|e| GatewayError::rule_load(source.as_str(), e.to_string()))?;
        let program =
            parse_program(&text).map_err(|e| GatewayError::rule_load(source.as_str(), e.to_string()))?;

        let mut kb = KnowledgeBase::new();
        kb.consult(program);
        kb.assert_facts(facts);
        debug!(
            "Prepared session for '{}' from {} ({} clauses)",
            domain.id(),
            source,
            kb.clause_count()
        );

        Ok(Box::new(RuleEngineSession {
            kb,
            max_depth: self.max_depth,
        }))
    }
}

/// One consulted knowledge base
pub struct RuleEngineSession {
    kb: KnowledgeBase,
    max_depth: usize,
}

#[async_trait]
impl InferenceSession for RuleEngineSession {
    async fn evaluate(&self, predicate: &str) -> Result<bool, GatewayError> {
        let goal = Goal::new(predicate, vec![Term::atom(SUBJECT)]);
        trace!("?- {}({}).", goal.name, SUBJECT);
        self.kb
            .prove(&goal, self.max_depth)
            .map_err(|e| GatewayError::query_failed(predicate, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DirectoryRuleLoader, RuleLoadError};
    use casewise_application::{EvaluateDomainError, EvaluateDomainInput, EvaluateDomainUseCase};
    use casewise_domain::{DomainRegistry, NOT_SATISFIED_ADVICE, Outcome, RawInput, RuleSource};

    fn use_case(gateway: RuleEngineGateway) -> EvaluateDomainUseCase<RuleEngineGateway> {
        EvaluateDomainUseCase::new(
            Arc::new(DomainRegistry::builtin().unwrap()),
            Arc::new(gateway),
        )
    }

    fn raw(fields: &[(&str, &str)]) -> RawInput {
        fields.iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Outcomes from the bundled rules, in query order
    async fn outcomes(domain: &str, fields: &[(&str, &str)]) -> Vec<bool> {
        use_case(RuleEngineGateway::bundled())
            .execute(EvaluateDomainInput::new(domain, raw(fields)))
            .await
            .unwrap()
            .verdicts
            .iter()
            .map(|v| v.outcome)
            .collect()
    }

    /// Serves one fixed text for every rule source
    struct InlineLoader(&'static str);

    impl RuleSourceLoader for InlineLoader {
        fn load(&self, _source: &RuleSource) -> Result<String, RuleLoadError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_tenant_eviction_invalid() {
        let input = raw(&[
            ("rent_paid", "Yes"),
            ("notice_given", "Yes"),
            ("deposit_returned", "No"),
            ("days_since", "40"),
            ("damage", "no"),
            ("rent_unpaid", "0"),
            ("written_agreement", "yes"),
        ]);
        let result = use_case(RuleEngineGateway::bundled())
            .execute(EvaluateDomainInput::new("tenant", input))
            .await
            .unwrap();

        let registry = DomainRegistry::builtin().unwrap();
        let tenant = registry.lookup("tenant").unwrap();

        let verdict = result.get("Eviction Invalid").unwrap();
        assert!(verdict.outcome);
        assert_eq!(verdict.advice, tenant.advice("Eviction Invalid").unwrap());
        assert_eq!(
            verdict.next_steps,
            tenant.next_steps("Eviction Invalid", Outcome::Yes).unwrap()
        );

        assert!(result.get("Refund Claim").unwrap().outcome);
        assert!(result.get("Deposit Rights").unwrap().outcome);
        assert!(!result.get("Eviction Allowed").unwrap().outcome);
        assert!(!result.get("Landlord Deduction Allowed").unwrap().outcome);
        assert!(!result.get("Month-to-Month Tenancy").unwrap().outcome);
    }

    #[tokio::test]
    async fn test_traffic_clean_record_is_all_no() {
        let input = raw(&[
            ("recorded_speed", "40"),
            ("speed_limit", "60"),
            ("helmet", "yes"),
            ("license", "Yes"),
            ("breathalyzer", "0.0"),
            ("seatbelt", "yes"),
        ]);
        let result = use_case(RuleEngineGateway::bundled())
            .execute(EvaluateDomainInput::new("traffic", input))
            .await
            .unwrap();

        let registry = DomainRegistry::builtin().unwrap();
        let traffic = registry.lookup("traffic").unwrap();

        assert_eq!(result.verdicts.len(), traffic.queries().len());
        for verdict in &result.verdicts {
            assert!(!verdict.outcome, "{} should be NO", verdict.label);
            assert_eq!(verdict.advice, NOT_SATISFIED_ADVICE);
            let expected = traffic
                .next_steps(&verdict.label, Outcome::No)
                .unwrap_or(&[]);
            assert_eq!(verdict.next_steps, expected);
        }
    }

    #[tokio::test]
    async fn test_traffic_offences() {
        let input = raw(&[
            ("recorded_speed", "95"),
            ("speed_limit", "60"),
            ("helmet", "no"),
            ("license", "No"),
            ("breathalyzer", "0.01"),
        ]);
        let result = use_case(RuleEngineGateway::bundled())
            .execute(EvaluateDomainInput::new("traffic", input))
            .await
            .unwrap();

        assert!(result.get("Helmet Missing").unwrap().outcome);
        assert!(result.get("License Invalid").unwrap().outcome);
        assert!(result.get("Overspeeding").unwrap().outcome);
        assert!(!result.get("Drunk Driving").unwrap().outcome);
        assert!(!result.get("Seatbelt Missing").unwrap().outcome);
        assert!(result.get("Serious Traffic Offence").unwrap().outcome);
    }

    #[tokio::test]
    async fn test_consumer_complaint_when_no_other_remedy() {
        let input = raw(&[
            ("defective", "Yes"),
            ("days_since_purchase", "90"),
            ("bill_present", "Yes"),
            ("warranty", "No"),
        ]);
        let result = use_case(RuleEngineGateway::bundled())
            .execute(EvaluateDomainInput::new("consumer", input))
            .await
            .unwrap();

        let outcomes: Vec<bool> = result.verdicts.iter().map(|v| v.outcome).collect();
        assert_eq!(outcomes, vec![false, false, true]);
    }

    #[tokio::test]
    async fn test_capitalized_no_answers_match_rules() {
        let tenant = outcomes(
            "tenant",
            &[("damage", "No"), ("written_agreement", "No"), ("rent_unpaid", "0")],
        )
        .await;
        // Month-to-Month and Deposit Rights hold, no deduction
        assert_eq!(tenant, vec![false, false, true, false, false, true]);

        let traffic = outcomes(
            "traffic",
            &[("helmet", "No"), ("license", "Yes"), ("seatbelt", "No")],
        )
        .await;
        assert_eq!(traffic, vec![true, false, false, false, true, false]);
    }

    #[tokio::test]
    async fn test_tenant_damage_and_arrears() {
        let result = outcomes(
            "tenant",
            &[
                ("damage", "minor"),
                ("rent_unpaid", "3"),
                ("written_agreement", "yes"),
            ],
        )
        .await;
        assert_eq!(result, vec![false, false, false, true, true, false]);
    }

    #[tokio::test]
    async fn test_contract_breach_within_limitation_period() {
        let signed = [
            ("signed_by_both", "Yes"),
            ("essential_terms", "Yes"),
            ("terms_broken", "Yes"),
        ];

        let mut recent = signed.to_vec();
        recent.push(("days_since_breach", "100"));
        assert_eq!(outcomes("contract", &recent).await, vec![true, true, true]);

        let mut boundary = signed.to_vec();
        boundary.push(("days_since_breach", "1095"));
        assert_eq!(outcomes("contract", &boundary).await, vec![true, true, true]);

        let mut stale = signed.to_vec();
        stale.push(("days_since_breach", "2000"));
        assert_eq!(outcomes("contract", &stale).await, vec![true, true, false]);

        let unsigned = [("essential_terms", "Yes"), ("terms_broken", "Yes")];
        assert_eq!(outcomes("contract", &unsigned).await, vec![false, false, false]);
    }

    #[tokio::test]
    async fn test_employment_each_ground_gives_remedy() {
        assert_eq!(
            outcomes("employment", &[("unpaid_salary_months", "2")]).await,
            vec![true, false, false, true]
        );
        assert_eq!(
            outcomes("employment", &[("terminated_without_notice", "Yes")]).await,
            vec![false, true, false, true]
        );
        assert_eq!(
            outcomes("employment", &[("harassment", "Yes")]).await,
            vec![false, false, true, true]
        );
        assert_eq!(
            outcomes("employment", &[("unpaid_salary_months", "0")]).await,
            vec![false, false, false, false]
        );
    }

    #[tokio::test]
    async fn test_cyber_identity_theft_risk() {
        assert_eq!(
            outcomes("cyber", &[("otp_shared", "Yes"), ("clicked_link", "Yes")]).await,
            vec![true, true, false, true, true]
        );
        assert_eq!(
            outcomes(
                "cyber",
                &[("otp_shared", "Yes"), ("unauthorized_transaction", "Yes")]
            )
            .await,
            vec![true, false, true, true, true]
        );
        // A click alone is not enough for either conclusion
        assert_eq!(
            outcomes("cyber", &[("clicked_link", "Yes")]).await,
            vec![false, true, false, false, false]
        );
    }

    #[tokio::test]
    async fn test_every_domain_answers_every_query_with_empty_input() {
        let registry = DomainRegistry::builtin().unwrap();
        let uc = use_case(RuleEngineGateway::bundled());

        for domain in registry.domains() {
            let result = uc
                .execute(EvaluateDomainInput::new(domain.id(), RawInput::new()))
                .await
                .unwrap();
            let labels: Vec<&str> = result.verdicts.iter().map(|v| v.label.as_str()).collect();
            let expected: Vec<&str> = domain.queries().iter().map(|q| q.label.as_str()).collect();
            assert_eq!(labels, expected, "query order for {}", domain.id());
        }
    }

    #[tokio::test]
    async fn test_prepared_sessions_are_isolated() {
        let registry = DomainRegistry::builtin().unwrap();
        let cyber = registry.lookup("cyber").unwrap();
        let gateway = RuleEngineGateway::bundled();

        let victim = cyber.normalize(&raw(&[("unauthorized_transaction", "Yes")]));
        let first = gateway.prepare(cyber, &victim).await.unwrap();
        let second = gateway.prepare(cyber, &FactSet::default()).await.unwrap();

        assert!(first.evaluate("file_cyber_complaint").await.unwrap());
        assert!(!second.evaluate("file_cyber_complaint").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_domain() {
        let err = use_case(RuleEngineGateway::bundled())
            .execute(EvaluateDomainInput::new("bankruptcy", RawInput::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, EvaluateDomainError::DomainNotFound(ref id) if id == "bankruptcy"));
    }

    #[tokio::test]
    async fn test_missing_rule_file_is_rule_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = RuleEngineGateway::new(Arc::new(DirectoryRuleLoader::new(dir.path())));

        let err = use_case(gateway)
            .execute(EvaluateDomainInput::new("tenant", RawInput::new()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EvaluateDomainError::RuleLoadFailure {
                source: GatewayError::RuleLoadFailure { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unparsable_rule_file_is_rule_load_failure() {
        let gateway = RuleEngineGateway::new(Arc::new(InlineLoader("eviction_invalid(X) :- .")));
        let err = use_case(gateway)
            .execute(EvaluateDomainInput::new("tenant", RawInput::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, EvaluateDomainError::RuleLoadFailure { .. }));
    }

    #[tokio::test]
    async fn test_undefined_predicate_degrades_to_no() {
        // Only one of the six tenant predicates is defined
        let gateway = RuleEngineGateway::new(Arc::new(InlineLoader(
            "eviction_invalid(X) :- rent_paid(X).",
        )));
        let result = use_case(gateway)
            .execute(EvaluateDomainInput::new(
                "tenant",
                raw(&[("rent_paid", "Yes")]),
            ))
            .await
            .unwrap();

        assert_eq!(result.verdicts.len(), 6);
        assert!(result.get("Eviction Invalid").unwrap().outcome);
        assert_eq!(result.positive_count(), 1);
    }

    #[tokio::test]
    async fn test_depth_limit_is_per_query_fault() {
        let registry = DomainRegistry::builtin().unwrap();
        let tenant = registry.lookup("tenant").unwrap();
        let gateway = RuleEngineGateway::new(Arc::new(InlineLoader(
            "eviction_invalid(X) :- eviction_invalid(X).",
        )))
        .with_max_depth(16);
        assert_eq!(gateway.max_depth(), 16);

        let session = gateway.prepare(tenant, &FactSet::default()).await.unwrap();
        let err = session.evaluate("eviction_invalid").await.unwrap_err();
        assert!(matches!(err, GatewayError::QueryFailed { .. }));
    }
}
