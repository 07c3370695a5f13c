//! Request and response models for the Skyforge API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use skyforge_core::{CloudProvider, OptimizationGoal};

/// User's architecture requirements
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchitectureRequirement {
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// List of requirements (optional)
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Preferred cloud provider
    pub provider: CloudProvider,
    /// Optimization preference
    #[serde(default)]
    pub optimization_goal: OptimizationGoal,
    /// Monthly budget in USD
    #[serde(default)]
    pub budget: Option<f64>,
    /// Expected number of users
    #[serde(default)]
    pub expected_users: Option<u64>,
}

impl ArchitectureRequirement {
    /// Format the requirements block sent to the agent.
    pub fn format_for_agent(&self) -> String {
        let mut text = format!(
            "\nTitle: {}\nDescription: {}\nCloud Provider: {}\nOptimization Goal: {}\n",
            self.title, self.description, self.provider, self.optimization_goal
        );

        if !self.requirements.is_empty() {
            text.push_str("\nRequirements:\n");
            for requirement in &self.requirements {
                text.push_str(&format!("- {}\n", requirement));
            }
        }

        if let Some(budget) = self.budget {
            text.push_str(&format!("\nBudget: ${}/month", budget));
        }

        if let Some(users) = self.expected_users {
            text.push_str(&format!("\nExpected Users: {}", group_thousands(users)));
        }

        text
    }
}

/// Request to optimize existing components
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentOptimizationRequest {
    pub provider: CloudProvider,
    /// Current components, as the front end holds them
    pub components: Vec<Value>,
    /// Current monthly cost
    pub current_cost: f64,
    pub optimization_goal: OptimizationGoal,
}

/// Request to analyze an architecture diagram
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagramAnalysisRequest {
    pub provider: CloudProvider,
    pub nodes: Vec<Value>,
    pub edges: Vec<Value>,
    #[serde(default)]
    pub requirements: Option<String>,
}

/// Free-form question for the agent
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// Request to generate infrastructure-as-code
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeGenerationRequest {
    /// Architecture as the front end holds it
    pub architecture: Value,
    /// "terraform" or "cloudformation"
    #[serde(default = "default_code_type")]
    pub code_type: String,
}

fn default_code_type() -> String {
    "terraform".to_string()
}

/// Deployment target settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub provider: Option<String>,
    pub region: Option<String>,
    pub stack_name: Option<String>,
}

/// Request to deploy an architecture (simulated)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeploymentRequest {
    pub architecture: Value,
    #[serde(default)]
    pub config: DeploymentConfig,
}

/// Generic AI agent response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// API health check response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthCheck {
    pub status: String,
    pub version: String,
    pub agent_ready: bool,
    pub backend: String,
    pub model_id: String,
}

// 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_for_agent_includes_all_sections() {
        let req = ArchitectureRequirement {
            title: "Shop".into(),
            description: "An online shop".into(),
            requirements: vec!["HA".into(), "Low latency".into()],
            provider: CloudProvider::Aws,
            optimization_goal: OptimizationGoal::Cost,
            budget: Some(250.0),
            expected_users: Some(1_250_000),
        };
        let text = req.format_for_agent();
        assert!(text.contains("Title: Shop"));
        assert!(text.contains("Cloud Provider: aws"));
        assert!(text.contains("Optimization Goal: cost"));
        assert!(text.contains("- HA\n- Low latency"));
        assert!(text.contains("Budget: $250/month"));
        assert!(text.contains("Expected Users: 1,250,000"));
    }

    #[test]
    fn format_for_agent_omits_empty_sections() {
        let req = ArchitectureRequirement {
            title: "Shop".into(),
            description: "An online shop".into(),
            requirements: vec![],
            provider: CloudProvider::Gcp,
            optimization_goal: OptimizationGoal::default(),
            budget: None,
            expected_users: None,
        };
        let text = req.format_for_agent();
        assert!(!text.contains("Requirements:"));
        assert!(!text.contains("Budget:"));
        assert!(!text.contains("Expected Users:"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn optimization_goal_defaults_to_balanced() {
        let req: ArchitectureRequirement = serde_json::from_str(
            r#"{"title": "T", "description": "D", "provider": "aws"}"#,
        )
        .unwrap();
        assert_eq!(req.optimization_goal, OptimizationGoal::Balanced);
    }
}
