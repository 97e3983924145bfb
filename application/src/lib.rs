//! Application layer for casewise
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    evaluation_logger::{EvaluationEvent, EvaluationLogger, NoEvaluationLogger},
    inference_gateway::{GatewayError, InferenceGateway, InferenceSession},
};
pub use use_cases::evaluate_domain::{
    EvaluateDomainError, EvaluateDomainInput, EvaluateDomainUseCase,
};
