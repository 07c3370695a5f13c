//! Shared domain vocabulary for the Skyforge pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported cloud providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    /// Wire-format name of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Gcp => "gcp",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimization preference attached to a recommendation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationGoal {
    Cost,
    Performance,
    #[default]
    Balanced,
}

impl OptimizationGoal {
    /// Wire-format name of the goal
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationGoal::Cost => "cost",
            OptimizationGoal::Performance => "performance",
            OptimizationGoal::Balanced => "balanced",
        }
    }
}

impl fmt::Display for OptimizationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&CloudProvider::Aws).unwrap(), "\"aws\"");
        assert_eq!(serde_json::to_string(&CloudProvider::Gcp).unwrap(), "\"gcp\"");
    }

    #[test]
    fn goal_defaults_to_balanced() {
        assert_eq!(OptimizationGoal::default(), OptimizationGoal::Balanced);
    }

    #[test]
    fn provider_roundtrip() {
        let provider: CloudProvider = serde_json::from_str("\"azure\"").unwrap();
        assert_eq!(provider, CloudProvider::Azure);
        assert_eq!(provider.to_string(), "azure");
    }
}
