//! Configuration for the Skyforge Server
//!
//! This module contains the configuration types and loading functionality.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Which wire format the model endpoint speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// OpenAI-compatible chat envelope (`choices[0].message.content`)
    Chat,
    /// Direct-completion envelope (`content[0].text`)
    Completion,
}

impl BackendKind {
    /// Wire-format name of the backend kind
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Chat => "chat",
            BackendKind::Completion => "completion",
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// Wire format of the model endpoint
    #[serde(default = "default_backend_kind")]
    pub model_backend: BackendKind,

    /// Invocation URL of the model endpoint
    pub model_endpoint_url: String,

    /// Model identifier sent with each request
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Bearer token for the model endpoint
    #[serde(default)]
    pub model_api_token: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Nucleus sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Request timeout toward the model endpoint, in seconds.
    /// Absent leaves model calls unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_backend_kind() -> BackendKind {
    BackendKind::Chat
}

fn default_model_id() -> String {
    "llama-3.1-nemotron-nano-8b".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_top_p() -> f64 {
    0.9
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        // Start with defaults
        let mut config = Self::default();

        // Override from environment variables
        if let Ok(port) = env::var("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Ok(host) = env::var("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Ok(kind) = env::var("MODEL_BACKEND") {
            config.model_backend = match kind.to_lowercase().as_str() {
                "chat" => BackendKind::Chat,
                "completion" => BackendKind::Completion,
                other => {
                    return Err(ServerError::ConfigError(format!(
                        "Unknown MODEL_BACKEND: {}. Use 'chat' or 'completion'",
                        other
                    )))
                }
            };
        }

        if let Ok(endpoint_url) = env::var("MODEL_ENDPOINT_URL") {
            config.model_endpoint_url = endpoint_url;
        }

        if let Ok(model_id) = env::var("MODEL_ID") {
            config.model_id = model_id;
        }

        if let Ok(token) = env::var("MODEL_API_TOKEN") {
            config.model_api_token = Some(token);
        }

        if let Ok(temperature) = env::var("MODEL_TEMPERATURE") {
            if let Ok(temperature) = temperature.parse::<f64>() {
                config.temperature = temperature;
            } else {
                warn!("Invalid MODEL_TEMPERATURE value: {}", temperature);
            }
        }

        if let Ok(max_tokens) = env::var("MODEL_MAX_TOKENS") {
            if let Ok(max_tokens) = max_tokens.parse::<u32>() {
                config.max_tokens = max_tokens;
            } else {
                warn!("Invalid MODEL_MAX_TOKENS value: {}", max_tokens);
            }
        }

        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                config.request_timeout_secs = Some(timeout);
            } else {
                warn!("Invalid REQUEST_TIMEOUT_SECS value: {}", timeout);
            }
        }

        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.log_level = log_level;
        }

        // Validate required fields
        if config.model_endpoint_url.is_empty() {
            return Err(ServerError::ConfigError(
                "Model endpoint URL is required".to_string(),
            ));
        }

        // Add warnings for missing optional fields
        if config.model_api_token.is_none() {
            warn!("No MODEL_API_TOKEN provided - model endpoint calls will be unauthenticated");
        }

        info!("Loaded server configuration");
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            model_backend: default_backend_kind(),
            model_endpoint_url: String::new(),
            model_id: default_model_id(),
            model_api_token: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}
