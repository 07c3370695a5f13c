//! Architecture endpoints: generation, optimization and validation.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::schemas::{
    ArchitectureRequirement, ComponentOptimizationRequest, DiagramAnalysisRequest,
};
use crate::server::SkyforgeServer;

/// Handler for architecture generation
pub async fn generate_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Json(req): Json<ArchitectureRequirement>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.generate_architecture(&req).await?;
    Ok(Json(response))
}

/// Handler for architecture optimization
pub async fn optimize_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Json(req): Json<ComponentOptimizationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.optimize_architecture(&req).await?;
    Ok(Json(response))
}

/// Handler for architecture validation
pub async fn validate_handler(
    State(server): State<Arc<SkyforgeServer>>,
    Json(req): Json<DiagramAnalysisRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = server.validate_design(&req).await?;
    Ok(Json(response))
}
