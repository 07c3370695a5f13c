//! Assistant endpoints: provider comparison, chat, code generation and the
//! simulated deployment flow.

use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::schemas::{ChatRequest, CodeGenerationRequest, DeploymentRequest};
use crate::server::SkyforgeServer;

/// Handler for cross-provider service comparison
pub async fn compare_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Path(service_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.compare_services(&service_name).await?;
    Ok(Json(response))
}

/// Handler for free-form questions
pub async fn chat_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.chat(&req).await?;
    Ok(Json(response))
}

/// Handler for infrastructure-as-code generation
pub async fn code_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Json(req): Json<CodeGenerationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.generate_code(&req).await?;
    Ok(Json(response))
}

/// Handler for (simulated) deployment
pub async fn deploy_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Json(req): Json<DeploymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.deploy(&req).await?;
    Ok(Json(response))
}
