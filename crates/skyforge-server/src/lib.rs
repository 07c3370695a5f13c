//!
//! Skyforge Server - HTTP application server for the Skyforge platform
//!
//! This module exports all the components of the Skyforge Server.

use std::sync::Arc;
use std::time::Duration;

/// API module
pub mod api;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

/// Request/response models
pub mod schemas;

/// Server module
pub mod server;

// Re-export key types
pub use config::{BackendKind, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::SkyforgeServer;

use skyforge_agent::{
    ArchitectureAgent, ChatCompletionBackend, CompletionBackend, InvokeOptions, ModelBackend,
};

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    // Create dependencies
    let backend = create_model_backend(&config)?;
    let agent = Arc::new(ArchitectureAgent::with_options(
        backend,
        InvokeOptions {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        },
    ));

    // Create and run the server
    let server = SkyforgeServer::new(config, agent);
    server.run().await
}

/// Initialize logging
fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber
    fmt().with_env_filter(filter).with_target(true).init();
}

/// Create the model backend client selected by configuration
pub fn create_model_backend(config: &ServerConfig) -> ServerResult<Arc<dyn ModelBackend>> {
    let timeout = config.request_timeout_secs.map(Duration::from_secs);

    let backend: Arc<dyn ModelBackend> = match config.model_backend {
        BackendKind::Chat => {
            tracing::info!("Using chat model backend: {}", config.model_id);
            Arc::new(ChatCompletionBackend::new(
                config.model_endpoint_url.clone(),
                config.model_id.clone(),
                config.model_api_token.clone(),
                timeout,
            )?)
        }
        BackendKind::Completion => {
            tracing::info!("Using completion model backend: {}", config.model_id);
            Arc::new(CompletionBackend::new(
                config.model_endpoint_url.clone(),
                config.model_id.clone(),
                config.model_api_token.clone(),
                timeout,
            )?)
        }
    };

    Ok(backend)
}
