//! Direct-completion backend variant.
//!
//! Speaks the Anthropic-style invoke envelope: messages in, a `content` array
//! of text segments out. The first text segment is the completion.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::backend::{InvokeOptions, ModelBackend};
use crate::error::{AgentError, AgentResult};

/// Direct-completion model backend
#[derive(Debug, Clone)]
pub struct CompletionBackend {
    /// Invocation URL of the completion endpoint
    endpoint_url: String,

    /// Model identifier sent with each request
    model_id: String,

    /// Bearer token, when the endpoint requires one
    api_token: Option<String>,

    /// HTTP client
    client: Client,
}

impl CompletionBackend {
    /// Create a new CompletionBackend.
    ///
    /// `timeout` is optional; `None` leaves the request unbounded, matching
    /// the no-timeout contract around the model call.
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
impl ModelBackend for CompletionBackend {
    async fn invoke(&self, prompt: &str, options: &InvokeOptions) -> AgentResult<String> {
        debug!(
            "Invoking completion backend {} (prompt length: {} chars)",
            self.model_id,
            prompt.len()
        );

        let body = json!({
            "model": self.model_id,
            "max_tokens": options.max_tokens,
            "temperature": options.temperature,
            "top_p": options.top_p,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
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
                "Completion endpoint returned {}: {}",
                status, error_body
            )));
        }

        let result: Value = response.json().await?;

        result["content"][0]["text"]
            .as_str()
            .map(|text| text.to_string())
            .ok_or_else(|| {
                AgentError::UnexpectedResponse(
                    "completion response carried no content[0].text".to_string(),
                )
            })
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }
}
