//! Architecture cost calculation over the service catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::service_info;

/// One service with a quantity, as submitted by a caller
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceUsage {
    pub category: String,
    pub service: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Per-service line in a cost estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub service: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
}

/// Total monthly estimate with breakdown. Unknown services are skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub total_monthly_cost: f64,
    pub breakdown: Vec<CostLine>,
    pub currency: &'static str,
}

/// Estimate the total monthly cost for a set of services.
pub fn architecture_cost(services: &[ServiceUsage]) -> CostEstimate {
    let mut total = 0.0;
    let mut breakdown = Vec::new();

    for usage in services {
        if let Some(info) = service_info(&usage.category, &usage.service) {
            let line_total = info.cost * usage.quantity as f64;
            total += line_total;
            breakdown.push(CostLine {
                service: info.name.to_string(),
                quantity: usage.quantity,
                unit_cost: info.cost,
                total_cost: line_total,
            });
        }
    }

    CostEstimate {
        total_monthly_cost: (total * 100.0).round() / 100.0,
        breakdown,
        currency: "USD",
    }
}
