//! Health check endpoints for the Skyforge Server
//!
//! This module contains the health check handlers.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::schemas::HealthCheck;
use crate::server::SkyforgeServer;

/// Root health check handler
///
/// Reports readiness and which model backend the server was assembled with.
/// The agent is constructed at startup, so readiness here means the process
/// is wired, not that the remote endpoint has been probed.
pub async fn health_check(State(server): State<Arc<SkyforgeServer>>) -> impl IntoResponse {
    info!("Health check requested");

    Json(HealthCheck {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        agent_ready: true,
        backend: server.config.model_backend.as_str().to_string(),
        model_id: server.model_id(),
    })
}

/// Simple liveness probe
pub async fn liveness() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "Skyforge AI Backend" }))
}
