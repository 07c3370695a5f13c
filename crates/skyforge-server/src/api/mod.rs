//! API module for the Skyforge Server
//!
//! This module contains the API routes and handlers for the Skyforge Server.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod architecture;
pub mod assist;
pub mod errors;
pub mod health;

use crate::server::SkyforgeServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<SkyforgeServer>) -> Router {
    Router::new()
        // Architecture
        .route("/api/architecture/generate", post(architecture::generate_handler))
        .route("/api/architecture/optimize", post(architecture::optimize_handler))
        .route("/api/architecture/validate", post(architecture::validate_handler))
        // Cloud assistance
        .route("/api/cloud/compare/:service_name", get(assist::compare_handler))
        .route("/api/chat", post(assist::chat_handler))
        .route("/api/code/generate", post(assist::code_handler))
        .route("/api/deploy", post(assist::deploy_handler))
        // Health checks
        .route("/", get(health::health_check))
        .route("/health", get(health::liveness))
        // The browser front end is served from a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(server)
}

// Re-export all modules for easier imports
pub use errors::ApiError;
