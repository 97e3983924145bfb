//! Evaluate Domain use case
//!
//! Orchestrates one evaluation: registry lookup, fact normalization, a single
//! inference session, and verdict resolution for every query in order.

use crate::ports::evaluation_logger::{EvaluationEvent, EvaluationLogger, NoEvaluationLogger};
use crate::ports::inference_gateway::{GatewayError, InferenceGateway};
use casewise_domain::{DomainRegistry, DomainVerdicts, RawInput, resolve};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that abort a whole evaluation
///
/// Per-query backend faults are not errors: they resolve to `false`.
#[derive(Error, Debug)]
pub enum EvaluateDomainError {
    #[error("Unknown legal domain: {0}")]
    DomainNotFound(String),

    #[error("Rules for domain '{domain}' could not be loaded: {source}")]
    RuleLoadFailure {
        domain: String,
        #[source]
        source: GatewayError,
    },
}

impl EvaluateDomainError {
    /// Routing failures (bad domain id) as opposed to evaluation failures
    pub fn is_routing_error(&self) -> bool {
        matches!(self, EvaluateDomainError::DomainNotFound(_))
    }
}

/// Input for the EvaluateDomain use case
#[derive(Debug, Clone)]
pub struct EvaluateDomainInput {
    pub domain_id: String,
    pub raw_input: RawInput,
}

impl EvaluateDomainInput {
    pub fn new(domain_id: impl Into<String>, raw_input: RawInput) -> Self {
        Self {
            domain_id: domain_id.into(),
            raw_input,
        }
    }
}

/// Use case for evaluating every legal question of one domain
pub struct EvaluateDomainUseCase<G: InferenceGateway + 'static> {
    registry: Arc<DomainRegistry>,
    gateway: Arc<G>,
    logger: Arc<dyn EvaluationLogger>,
}

impl<G: InferenceGateway + 'static> EvaluateDomainUseCase<G> {
    pub fn new(registry: Arc<DomainRegistry>, gateway: Arc<G>) -> Self {
        Self {
            registry,
            gateway,
            logger: Arc::new(NoEvaluationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn EvaluationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    /// Execute the use case
    ///
    /// Returns one verdict per query of the domain, in query order.
    pub async fn execute(
        &self,
        input: EvaluateDomainInput,
    ) -> Result<DomainVerdicts, EvaluateDomainError> {
        let domain = self
            .registry
            .lookup(&input.domain_id)
            .map_err(|_| EvaluateDomainError::DomainNotFound(input.domain_id.clone()))?;
        info!(
            "Evaluating domain '{}' ({} queries)",
            domain.id(),
            domain.queries().len()
        );

        let facts = domain.normalize(&input.raw_input);
        debug!("Normalized {} facts for '{}'", facts.len(), domain.id());
        self.logger.log(EvaluationEvent::new(
            "facts_normalized",
            json!({
                "domain": domain.id(),
                "facts": facts.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
            }),
        ));

        let session = match self.gateway.prepare(domain, &facts).await {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to load rules for '{}': {}", domain.id(), e);
                self.logger.log(EvaluationEvent::new(
                    "rule_load_failed",
                    json!({
                        "domain": domain.id(),
                        "rule_source": domain.rule_source().as_str(),
                        "error": e.to_string(),
                    }),
                ));
                return Err(EvaluateDomainError::RuleLoadFailure {
                    domain: domain.id().to_string(),
                    source: e,
                });
            }
        };

        let mut verdicts = Vec::with_capacity(domain.queries().len());
        for query in domain.queries() {
            let outcome = match session.evaluate(&query.predicate).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("Query '{}' degraded to NO: {}", query.predicate, e);
                    self.logger.log(EvaluationEvent::new(
                        "query_fault",
                        json!({
                            "domain": domain.id(),
                            "label": query.label,
                            "predicate": query.predicate,
                            "error": e.to_string(),
                        }),
                    ));
                    false
                }
            };
            debug!("{} => {}", query.predicate, outcome);
            self.logger.log(EvaluationEvent::new(
                "query_evaluated",
                json!({
                    "domain": domain.id(),
                    "label": query.label,
                    "predicate": query.predicate,
                    "outcome": outcome,
                }),
            ));
            verdicts.push(resolve(domain, query, outcome));
        }

        let result = DomainVerdicts {
            domain_id: domain.id().to_string(),
            domain_name: domain.display_name().to_string(),
            verdicts,
        };
        info!(
            "Domain '{}' evaluated: {}/{} questions answered YES",
            result.domain_id,
            result.positive_count(),
            result.verdicts.len()
        );
        self.logger.log(EvaluationEvent::new(
            "evaluation_completed",
            json!({
                "domain": result.domain_id,
                "total": result.verdicts.len(),
                "positive": result.positive_count(),
            }),
        ));

        Ok(result)
    }
}
