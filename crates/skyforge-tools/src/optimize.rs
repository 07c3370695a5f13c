//! Usage-pattern driven cost-optimization advice.

use serde::Serialize;

/// A concrete alternative for a given service under a usage pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationSuggestion {
    pub current_service: String,
    pub suggested_alternative: &'static str,
    pub estimated_savings: &'static str,
    pub reason: &'static str,
    pub usage_pattern: String,
}

/// Result of an optimization lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptimizationAdvice {
    Suggestion(OptimizationSuggestion),
    /// No table entry for the combination; carries the general tip
    General { message: &'static str, general_tip: &'static str },
}

// (category, service, usage pattern, alternative, savings, reason)
const OPTIMIZATIONS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "compute", "ec2", "low",
        "lambda", "60%", "Serverless for low usage",
    ),
    (
        "compute", "ec2", "variable",
        "spot_instances", "70%", "Use spot instances for variable workloads",
    ),
    (
        "compute", "lambda", "high",
        "ec2", "40%", "EC2 more cost-effective for constant high usage",
    ),
    (
        "database", "rds", "low",
        "aurora_serverless", "50%", "Aurora Serverless scales to zero",
    ),
    (
        "database", "rds", "variable",
        "aurora_serverless", "45%", "Auto-scaling for variable loads",
    ),
    (
        "storage", "s3", "low",
        "s3_glacier", "80%", "Use Glacier for infrequent access",
    ),
];

/// Look up a cost-saving alternative for a service and usage pattern.
pub fn cost_optimization(service: &str, category: &str, usage_pattern: &str) -> OptimizationAdvice {
    let service_key = service.to_lowercase();
    let category_key = category.to_lowercase();
    let pattern_key = usage_pattern.to_lowercase();

    let hit = OPTIMIZATIONS.iter().find(|(cat, svc, pattern, _, _, _)| {
        *cat == category_key && *svc == service_key && *pattern == pattern_key
    });

    match hit {
        Some(&(_, _, _, alternative, savings, reason)) => {
            OptimizationAdvice::Suggestion(OptimizationSuggestion {
                current_service: service.to_string(),
                suggested_alternative: alternative,
                estimated_savings: savings,
                reason,
                usage_pattern: usage_pattern.to_string(),
            })
        }
        None => OptimizationAdvice::General {
            message: "No specific optimization found for this combination",
            general_tip: "Consider reserved instances for predictable workloads",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_hit_returns_suggestion() {
        let advice = cost_optimization("EC2", "Compute", "LOW");
        match advice {
            OptimizationAdvice::Suggestion(suggestion) => {
                assert_eq!(suggestion.suggested_alternative, "lambda");
                assert_eq!(suggestion.estimated_savings, "60%");
            }
            OptimizationAdvice::General { .. } => panic!("expected a table hit"),
        }
    }

    #[test]
    fn table_miss_returns_general_tip() {
        let advice = cost_optimization("vpc", "network", "high");
        assert!(matches!(advice, OptimizationAdvice::General { .. }));
    }
}
