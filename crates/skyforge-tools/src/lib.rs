//!
//! Skyforge Tools - Static cloud-service knowledge used to ground model output
//!
//! Everything in this crate is a table lookup or a keyword heuristic: no I/O,
//! no async, no state. The server merges these results into prompts and
//! responses so recommendations stay anchored to known service data even when
//! the model free-wheels.

/// AWS service catalog with baseline monthly costs
pub mod catalog;

/// Architecture cost calculation over the catalog
pub mod cost;

/// Usage-pattern driven cost-optimization advice
pub mod optimize;

/// Cross-provider service equivalents
pub mod alternatives;

/// Keyword-heuristic architecture validation
pub mod validate;

pub use alternatives::{service_alternatives, ServiceAlternatives};
pub use catalog::{service_info, ServiceInfo};
pub use cost::{architecture_cost, CostEstimate, CostLine, ServiceUsage};
pub use optimize::{cost_optimization, OptimizationAdvice};
pub use validate::{validate_architecture, ValidationReport};
