//! Chat-envelope backend variant.
//!
//! Speaks the OpenAI-compatible chat envelope used by NIM-style endpoints:
//! `choices[0].message.content` carries the completion, with
//! `generated_text` as a secondary shape some deployments return. Anything
//! else comes back verbatim so the caller still sees everything the model
//! produced.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use crate::backend::{InvokeOptions, ModelBackend};
use crate::error::{AgentError, AgentResult};

/// Chat-envelope model backend
#[derive(Debug, Clone)]
pub struct ChatCompletionBackend {
    /// Invocation URL of the chat endpoint
    endpoint_url: String,

    /// Model identifier sent with each request
    model_id: String,

    /// Bearer token, when the endpoint requires one
    api_token: Option<String>,

    /// HTTP client
    client: Client,
}

impl ChatCompletionBackend {
    /// Create a new ChatCompletionBackend. `None` timeout leaves requests
    /// unbounded, matching the no-timeout contract around the model call.
    pub fn new(
        endpoint_url: String,
        model_id: String,
        api_token: Option<String>,
        timeout: Option<Duration>,
    ) -> AgentResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AgentError::Configuration(e.to_string()))?;

        Ok(Self {
            endpoint_url,
            model_id,
            api_token,
            client,
        })
    }
}

#[async_trait]
impl ModelBackend for ChatCompletionBackend {
    async fn invoke(&self, prompt: &str, options: &InvokeOptions) -> AgentResult<String> {
        debug!(
            "Invoking chat backend {} (prompt length: {} chars)",
            self.model_id,
            prompt.len()
        );

        let body = json!({
            "model": self.model_id,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": options.temperature,
            "max_tokens": options.max_tokens,
            "top_p": options.top_p,
            "stream": false
        });

        let mut request = self.client.post(&self.endpoint_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AgentError::Backend(format!(
                "Chat endpoint returned {}: {}",
                status, error_body
            )));
        }

        let result: Value = response.json().await?;

        if let Some(text) = result["choices"][0]["message"]["content"].as_str() {
            return Ok(text.to_string());
        }

        // Secondary shape some deployments return.
        if let Some(text) = result["generated_text"].as_str() {
            return Ok(text.to_string());
        }

        warn!("Unexpected chat response format, returning raw body");
        Ok(result.to_string())
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }
}
