//! Main Skyforge Server implementation
//!
//! This module contains the SkyforgeServer implementation: request-scoped
//! orchestration between the agent, the parsing pipeline, and the static
//! cloud-service tools. The server holds no mutable state; every request is
//! one backend invocation followed by one synchronous parse/transform pass.

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};
use uuid::Uuid;

use skyforge_agent::ArchitectureAgent;
use skyforge_core::{extract, transform};
use skyforge_tools::{
    cost_optimization, service_alternatives, validate_architecture, OptimizationAdvice,
};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::schemas::{
    AgentResponse, ArchitectureRequirement, ChatRequest, CodeGenerationRequest,
    ComponentOptimizationRequest, DeploymentRequest, DiagramAnalysisRequest,
};

/// Main server implementation
#[derive(Clone)]
pub struct SkyforgeServer {
    /// Configuration
    pub config: ServerConfig,

    /// Architecture agent (explicitly injected; no global singleton)
    agent: Arc<ArchitectureAgent>,
}

impl SkyforgeServer {
    /// Create a new SkyforgeServer
    pub fn new(config: ServerConfig, agent: Arc<ArchitectureAgent>) -> Self {
        Self { config, agent }
    }

    /// Identifier of the configured model, for health reporting
    pub fn model_id(&self) -> String {
        self.agent.model_id()
    }

    /// Run the server
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Skyforge Server");

        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|e| {
                crate::error::ServerError::ConfigError(format!("Invalid bind address: {}", e))
            })?;

        // Build the API router
        let app = crate::api::build_router(Arc::new(self));

        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Generate an architecture recommendation.
    ///
    /// Parses the hybrid model response into a presentation graph. When no
    /// structured payload can be extracted, the full raw text is returned
    /// instead of a failure: model output carries no guarantee of being well
    /// formed, and the user should see everything the model produced.
    pub async fn generate_architecture(
        &self,
        req: &ArchitectureRequirement,
    ) -> ServerResult<AgentResponse> {
        let requirements = req.format_for_agent();
        info!(
            "Architecture generation request: {} ({} / {})",
            req.title, req.provider, req.optimization_goal
        );

        let raw = self.agent.generate_architecture(&requirements).await?;
        info!("Model response received (length: {} chars)", raw.len());

        let extraction = extract(&raw);

        match extraction.payload {
            Some(payload) => {
                info!(
                    "Parsed architecture payload: {} services, {} connections, ${}/mo",
                    payload.services.len(),
                    payload.connections.len(),
                    payload.total_cost
                );

                let graph = transform(&payload, req.provider);
                Ok(AgentResponse {
                    success: true,
                    message: "Architecture generated successfully".to_string(),
                    data: Some(serde_json::to_value(graph)?),
                    recommendations: None,
                    reasoning: Some(extraction.prose),
                })
            }
            None => {
                warn!("Could not extract structured payload, returning raw format");
                Ok(AgentResponse {
                    success: true,
                    message: "Architecture generated successfully".to_string(),
                    data: Some(json!({
                        "architecture": raw,
                        "provider": req.provider.as_str(),
                        "optimization_goal": req.optimization_goal.as_str(),
                    })),
                    recommendations: None,
                    reasoning: Some(raw),
                })
            }
        }
    }

    /// Optimize an existing architecture toward a goal.
    pub async fn optimize_architecture(
        &self,
        req: &ComponentOptimizationRequest,
    ) -> ServerResult<AgentResponse> {
        let description = format!(
            "\nProvider: {}\nCurrent Monthly Cost: ${}\nOptimization Goal: {}\n\nCurrent Components:\n{}",
            req.provider,
            req.current_cost,
            req.optimization_goal,
            req.components
                .iter()
                .map(|component| format!("- {}", component))
                .collect::<Vec<_>>()
                .join("\n"),
        );

        let response = self
            .agent
            .optimize_architecture(&description, req.optimization_goal.as_str())
            .await?;

        // Deterministic table hints for components that name a service,
        // category and usage pattern; the rest rely on the model alone.
        let hints: Vec<Value> = req
            .components
            .iter()
            .filter_map(|component| {
                let service = component.get("service")?.as_str()?;
                let category = component.get("category")?.as_str()?;
                let pattern = component.get("usage_pattern")?.as_str()?;
                match cost_optimization(service, category, pattern) {
                    OptimizationAdvice::Suggestion(suggestion) => {
                        serde_json::to_value(suggestion).ok()
                    }
                    OptimizationAdvice::General { .. } => None,
                }
            })
            .collect();

        Ok(AgentResponse {
            success: true,
            message: "Optimization recommendations generated".to_string(),
            data: Some(json!({
                "optimizations": response,
                "hints": hints,
                "current_cost": req.current_cost,
                "goal": req.optimization_goal.as_str(),
            })),
            recommendations: None,
            reasoning: Some(response),
        })
    }

    /// Validate an architecture design.
    pub async fn validate_design(
        &self,
        req: &DiagramAnalysisRequest,
    ) -> ServerResult<AgentResponse> {
        let mut description = format!(
            "\nProvider: {}\n\nServices:\n{}\n\nConnections:\n{}\n",
            req.provider,
            req.nodes
                .iter()
                .map(|node| format!("- {}", node))
                .collect::<Vec<_>>()
                .join("\n"),
            req.edges
                .iter()
                .map(|edge| format!("- {}", edge))
                .collect::<Vec<_>>()
                .join("\n"),
        );

        if let Some(requirements) = &req.requirements {
            description.push_str(&format!("\nRequirements: {}", requirements));
        }

        // Deterministic baseline first, model review second.
        let report = validate_architecture(&description);
        let response = self.agent.validate_design(&description).await?;

        Ok(AgentResponse {
            success: true,
            message: "Architecture validated".to_string(),
            data: Some(json!({
                "validation": response,
                "report": serde_json::to_value(&report)?,
            })),
            recommendations: Some(report.recommendations),
            reasoning: Some(response),
        })
    }

    /// Compare a service across providers.
    pub async fn compare_services(&self, service_name: &str) -> ServerResult<AgentResponse> {
        let alternatives = service_alternatives(service_name);
        let response = self.agent.compare_providers(service_name).await?;

        Ok(AgentResponse {
            success: true,
            message: format!("Comparison for {}", service_name),
            data: Some(json!({
                "comparison": response,
                "alternatives": alternatives
                    .map(serde_json::to_value)
                    .transpose()?,
            })),
            recommendations: None,
            reasoning: Some(response),
        })
    }

    /// Answer a free-form question about cloud architecture.
    pub async fn chat(&self, req: &ChatRequest) -> ServerResult<AgentResponse> {
        info!(
            "Chat question: {}...",
            req.question.chars().take(50).collect::<String>()
        );

        let response = self
            .agent
            .answer_question(&req.question, req.context.as_deref())
            .await?;

        Ok(AgentResponse {
            success: true,
            message: "Response from AI agent".to_string(),
            data: Some(json!({ "answer": response })),
            recommendations: None,
            reasoning: Some(response),
        })
    }

    /// Generate infrastructure-as-code for an architecture.
    pub async fn generate_code(&self, req: &CodeGenerationRequest) -> ServerResult<AgentResponse> {
        let architecture = &req.architecture;
        let provider = architecture["provider"].as_str().unwrap_or("aws");
        let name = architecture["name"].as_str().unwrap_or("Cloud Architecture");

        let components_description = architecture["components"]
            .as_array()
            .map(|components| {
                components
                    .iter()
                    .map(|component| {
                        format!(
                            "- {}: {}",
                            component["name"].as_str().unwrap_or("Unknown"),
                            component["description"].as_str().unwrap_or(""),
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        info!(
            "Code generation request: {} for {} ({})",
            req.code_type, name, provider
        );

        let code = self
            .agent
            .generate_code(&req.code_type, provider, name, &components_description)
            .await?;

        Ok(AgentResponse {
            success: true,
            message: format!("{} code generated successfully", capitalize(&req.code_type)),
            data: Some(json!({
                "code": code,
                "code_type": req.code_type,
                "provider": provider,
            })),
            recommendations: None,
            reasoning: Some(code),
        })
    }

    /// Deploy an architecture (simulated): the model writes the plan, the
    /// server synthesizes the log lines.
    pub async fn deploy(&self, req: &DeploymentRequest) -> ServerResult<AgentResponse> {
        let architecture = &req.architecture;
        let provider = req
            .config
            .provider
            .as_deref()
            .or_else(|| architecture["provider"].as_str())
            .unwrap_or("aws")
            .to_string();
        let region = req.config.region.as_deref().unwrap_or("us-west-2");
        let stack_name = req.config.stack_name.as_deref().unwrap_or("skyforge-stack");
        let name = architecture["name"].as_str().unwrap_or("Cloud Architecture");
        let component_count = architecture["components"]
            .as_array()
            .map(|components| components.len())
            .unwrap_or(0);

        info!("Deploying {} to {} in {}", stack_name, provider, region);

        let plan = self
            .agent
            .plan_deployment(&provider, region, stack_name, name, component_count)
            .await?;

        let logs = simulated_deployment_logs(&provider, region, stack_name);
        let endpoint = format!("https://{}-app-{}.example.com", provider, stack_name);

        Ok(AgentResponse {
            success: true,
            message: "Deployment completed successfully".to_string(),
            data: Some(json!({
                "status": "success",
                "deployment_id": Uuid::new_v4().to_string(),
                "deployment_logs": logs,
                "deployment_plan": plan,
                "endpoint": endpoint,
                "provider": provider,
                "region": region,
            })),
            recommendations: None,
            reasoning: Some(plan),
        })
    }
}

fn simulated_deployment_logs(provider: &str, region: &str, stack_name: &str) -> Vec<String> {
    let stamp = |level: &str, message: String| {
        format!("[{}] [{}] {}", Utc::now().format("%H:%M:%S"), level, message)
    };

    vec![
        stamp("INFO", format!("Initializing deployment to {}...", provider)),
        stamp("INFO", format!("Region: {}", region)),
        stamp("INFO", format!("Stack: {}", stack_name)),
        stamp("INFO", "Validating architecture configuration...".to_string()),
        stamp("SUCCESS", "Configuration validated".to_string()),
        stamp("INFO", "Creating VPC and networking resources...".to_string()),
        stamp("SUCCESS", "Network infrastructure created".to_string()),
        stamp("INFO", "Deploying compute resources...".to_string()),
        stamp("SUCCESS", "Compute resources deployed".to_string()),
        stamp("INFO", "Configuring storage services...".to_string()),
        stamp("SUCCESS", "Storage configured".to_string()),
        stamp("INFO", "Setting up databases...".to_string()),
        stamp("SUCCESS", "Database instances created".to_string()),
        stamp("INFO", "Finalizing deployment...".to_string()),
        stamp("SUCCESS", "Deployment completed successfully!".to_string()),
        stamp(
            "INFO",
            format!(
                "Access URL: https://{}-app-{}.example.com",
                provider, stack_name
            ),
        ),
    ]
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_logs_carry_target_details() {
        let logs = simulated_deployment_logs("aws", "eu-west-1", "shop-stack");
        assert!(logs[0].contains("Initializing deployment to aws"));
        assert!(logs.iter().any(|line| line.contains("eu-west-1")));
        assert!(logs
            .last()
            .unwrap()
            .contains("https://aws-app-shop-stack.example.com"));
    }

    #[test]
    fn capitalize_keeps_rest_of_word() {
        assert_eq!(capitalize("terraform"), "Terraform");
        assert_eq!(capitalize("cloudFormation"), "CloudFormation");
        assert_eq!(capitalize(""), "");
    }
}
