//! AWS service catalog with baseline monthly costs.

use serde::Serialize;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub category: &'static str,
    pub name: &'static str,
    /// Baseline monthly cost in USD
    pub cost: f64,
    pub description: &'static str,
}

// (category, service, display name, base monthly cost, description)
pub(crate) const AWS_SERVICES: &[(&str, &str, &str, f64, &str)] = &[
    ("compute", "ec2", "EC2", 29.2, "Virtual servers"),
    ("compute", "lambda", "Lambda", 8.3, "Serverless compute"),
    ("compute", "ecs", "ECS", 45.0, "Container orchestration"),
    ("storage", "s3", "S3", 12.5, "Object storage"),
    ("storage", "ebs", "EBS", 20.0, "Block storage"),
    ("storage", "efs", "EFS", 35.0, "File storage"),
    ("database", "rds", "RDS", 45.8, "Relational database"),
    ("database", "dynamodb", "DynamoDB", 25.0, "NoSQL database"),
    ("database", "aurora", "Aurora", 55.0, "High-performance RDS"),
    ("network", "alb", "Application Load Balancer", 18.0, "Load balancing"),
    ("network", "cloudfront", "CloudFront", 15.0, "CDN"),
    ("network", "vpc", "VPC", 0.0, "Virtual private cloud"),
];

/// Every catalog entry, in table order.
pub fn services() -> impl Iterator<Item = ServiceInfo> {
    AWS_SERVICES
        .iter()
        .map(|&(category, service, name, cost, description)| ServiceInfo {
            service,
            category,
            name,
            cost,
            description,
        })
}

/// Look up a service by category and short name. Case-insensitive.
pub fn service_info(category: &str, service: &str) -> Option<ServiceInfo> {
    let category = category.to_lowercase();
    let service = service.to_lowercase();

    AWS_SERVICES
        .iter()
        .find(|(cat, svc, _, _, _)| *cat == category && *svc == service)
        .map(|&(cat, svc, name, cost, description)| ServiceInfo {
            service: svc,
            category: cat,
            name,
            cost,
            description,
        })
}
