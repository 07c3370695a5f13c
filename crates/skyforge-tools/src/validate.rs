//! Keyword-heuristic architecture validation.
//!
//! Deliberately shallow: the description is scanned for well-known smells
//! (database without backups, compute without autoscaling, and so on) to give
//! the model review a deterministic baseline to build on.

use serde::Serialize;

/// Validation outcome with a best-practices score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub validation_passed: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub best_practices_score: u32,
}

/// Check an architecture description for common issues and best practices.
pub fn validate_architecture(description: &str) -> ValidationReport {
    let text = description.to_lowercase();
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if text.contains("database") && !text.contains("backup") {
        issues.push("No backup strategy mentioned for database".to_string());
        recommendations.push("Implement automated backups with point-in-time recovery".to_string());
    }

    if (text.contains("ec2") || text.contains("vm")) && !text.contains("autoscaling") {
        issues.push("No auto-scaling configuration mentioned".to_string());
        recommendations.push("Configure auto-scaling groups for better availability".to_string());
    }

    let has_load_balancer = text.contains("load balancer") || text.contains("alb");
    if !has_load_balancer && (text.contains("web") || text.contains("api")) {
        issues.push("No load balancer detected for web/API services".to_string());
        recommendations.push("Add a load balancer for high availability".to_string());
    }

    let has_cdn = text.contains("cdn") || text.contains("cloudfront");
    if !has_cdn && (text.contains("static") || text.contains("web")) {
        recommendations.push("Consider adding CDN for better performance".to_string());
    }

    if !text.contains("monitoring") {
        recommendations.push("Add monitoring solution (CloudWatch, Datadog, etc.)".to_string());
    }

    let penalty = issues.len() as i64 * 15 + recommendations.len() as i64 * 5;
    ValidationReport {
        validation_passed: issues.is_empty(),
        best_practices_score: (100 - penalty).max(0) as u32,
        issues,
        recommendations,
    }
}
