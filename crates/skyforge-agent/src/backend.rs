//! Interface for model-serving backends.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentResult;

/// Sampling options for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeOptions {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 4096,
            top_p: 0.9,
        }
    }
}

/// Interface for model backend operations.
///
/// One blocking call per request; no retries or cancellation live at this
/// seam. A failure propagates as the single terminal error for the request.
#[async_trait]
pub trait ModelBackend: Send + Sync + Debug {
    /// Send a prompt and return the flattened completion text
    async fn invoke(&self, prompt: &str, options: &InvokeOptions) -> AgentResult<String>;

    /// Identifier of the underlying model, for health reporting and logs
    fn model_id(&self) -> String;
}
