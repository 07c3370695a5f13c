//! The architecture agent facade.
//!
//! Owns the backend handle and the sampling options; one stateless backend
//! invocation per operation. The backend is injected at construction so
//! request handlers share a single explicitly-built client instead of a
//! lazily-initialized global.

use std::sync::Arc;
use tracing::info;

use crate::backend::{InvokeOptions, ModelBackend};
use crate::error::AgentResult;
use crate::prompt;

/// AI agent for cloud architecture design and optimization
#[derive(Debug, Clone)]
pub struct ArchitectureAgent {
    backend: Arc<dyn ModelBackend>,
    options: InvokeOptions,
    system_prompt: String,
}

impl ArchitectureAgent {
    /// Create an agent over the given backend with default sampling options.
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self::with_options(backend, InvokeOptions::default())
    }

    /// Create an agent with explicit sampling options.
    pub fn with_options(backend: Arc<dyn ModelBackend>, options: InvokeOptions) -> Self {
        Self {
            backend,
            options,
            system_prompt: prompt::system_prompt(),
        }
    }

    /// Identifier of the underlying model.
    pub fn model_id(&self) -> String {
        self.backend.model_id()
    }

    /// Generate an architecture recommendation from formatted requirements.
    pub async fn generate_architecture(&self, requirements: &str) -> AgentResult<String> {
        info!("Generating architecture recommendation");
        self.ask(&prompt::generate_architecture(requirements)).await
    }

    /// Optimize an existing architecture toward a goal.
    pub async fn optimize_architecture(
        &self,
        current_architecture: &str,
        optimization_goal: &str,
    ) -> AgentResult<String> {
        info!("Optimizing architecture (goal: {})", optimization_goal);
        self.ask(&prompt::optimize_architecture(
            current_architecture,
            optimization_goal,
        ))
        .await
    }

    /// Review a submitted design for issues and best practices.
    pub async fn validate_design(&self, architecture_description: &str) -> AgentResult<String> {
        info!("Validating architecture design");
        self.ask(&prompt::validate_design(architecture_description))
            .await
    }

    /// Compare a service across the three providers.
    pub async fn compare_providers(&self, service_name: &str) -> AgentResult<String> {
        info!("Comparing service across providers: {}", service_name);
        self.ask(&prompt::compare_providers(service_name)).await
    }

    /// Answer a free-form question, optionally with architecture context.
    pub async fn answer_question(
        &self,
        question: &str,
        context: Option<&str>,
    ) -> AgentResult<String> {
        self.ask(&prompt::answer_question(question, context)).await
    }

    /// Generate infrastructure-as-code for an architecture summary.
    ///
    /// Bypasses the system prompt: the code prompt stands alone so the
    /// response is code only, not the hybrid JSON-plus-markdown format.
    pub async fn generate_code(
        &self,
        code_type: &str,
        provider: &str,
        architecture_name: &str,
        components_description: &str,
    ) -> AgentResult<String> {
        info!("Generating {} code for {}", code_type, architecture_name);
        self.backend
            .invoke(
                &prompt::generate_code(code_type, provider, architecture_name, components_description),
                &self.options,
            )
            .await
    }

    /// Write a step-by-step deployment plan for the simulated deploy flow.
    pub async fn plan_deployment(
        &self,
        provider: &str,
        region: &str,
        stack_name: &str,
        architecture_name: &str,
        component_count: usize,
    ) -> AgentResult<String> {
        info!("Planning deployment of {} to {}", stack_name, provider);
        self.ask(&prompt::plan_deployment(
            provider,
            region,
            stack_name,
            architecture_name,
            component_count,
        ))
        .await
    }

    // The backend contract takes one flattened string, so the system prompt
    // is prepended here rather than sent as a separate role.
    async fn ask(&self, user_prompt: &str) -> AgentResult<String> {
        let full_prompt = format!("{}\n\n{}", self.system_prompt, user_prompt);
        self.backend.invoke(&full_prompt, &self.options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingBackend {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ModelBackend for RecordingBackend {
        async fn invoke(&self, prompt: &str, _options: &InvokeOptions) -> AgentResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("ok".to_string())
        }

        fn model_id(&self) -> String {
            "recording".to_string()
        }
    }

    #[tokio::test]
    async fn operations_prepend_the_system_prompt() {
        let backend = Arc::new(RecordingBackend::default());
        let agent = ArchitectureAgent::new(backend.clone());

        agent.generate_architecture("Title: Shop").await.unwrap();

        let prompts = backend.prompts.lock().unwrap();
        assert!(prompts[0].contains("CRITICAL OUTPUT FORMAT"));
        assert!(prompts[0].contains("Title: Shop"));
    }

    #[tokio::test]
    async fn code_generation_skips_the_system_prompt() {
        let backend = Arc::new(RecordingBackend::default());
        let agent = ArchitectureAgent::new(backend.clone());

        agent
            .generate_code("terraform", "aws", "Shop", "- EC2")
            .await
            .unwrap();

        let prompts = backend.prompts.lock().unwrap();
        assert!(!prompts[0].contains("CRITICAL OUTPUT FORMAT"));
        assert!(prompts[0].contains("TERRAFORM"));
    }
}
