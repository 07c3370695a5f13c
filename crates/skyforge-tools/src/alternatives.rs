//! Cross-provider service equivalents.

use serde::Serialize;

/// Equivalent services across the three supported providers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceAlternatives {
    pub service_category: &'static str,
    pub aws: &'static str,
    pub azure: &'static str,
    pub gcp: &'static str,
}

// (key, aws, azure, gcp)
const SERVICE_MAPPINGS: &[(&str, &str, &str, &str)] = &[
    ("ec2", "EC2", "Virtual Machines", "Compute Engine"),
    ("s3", "S3", "Blob Storage", "Cloud Storage"),
    ("rds", "RDS", "Azure SQL Database", "Cloud SQL"),
    ("lambda", "Lambda", "Azure Functions", "Cloud Functions"),
];

/// Find cross-provider equivalents for a service name.
///
/// Matching is fuzzy the way the original UI expects: names are lowercased
/// with spaces stripped, and a hit is either the mapping key appearing in the
/// query or the query matching one of the mapped display names.
pub fn service_alternatives(service_name: &str) -> Option<ServiceAlternatives> {
    let normalized = service_name.to_lowercase().replace(' ', "");

    SERVICE_MAPPINGS
        .iter()
        .find(|(key, aws, azure, gcp)| {
            normalized.contains(key)
                || [aws, azure, gcp]
                    .iter()
                    .any(|name| name.to_lowercase().replace(' ', "") == normalized)
        })
        .map(|&(key, aws, azure, gcp)| ServiceAlternatives {
            service_category: key,
            aws,
            azure,
            gcp,
        })
}
