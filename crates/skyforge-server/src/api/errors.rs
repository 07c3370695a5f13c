//! Error handling for the Skyforge Server API
//!
//! This module contains standardized error handling for the API.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::ServerError;

/// API Error type for returning standard error responses
#[derive(Debug)]
pub struct ApiError(pub ServerError);

impl From<ServerError> for ApiError {
    fn from(err: ServerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = match &self.0 {
            ServerError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                "ERR_NOT_FOUND".to_string(),
                format!("{} not found", resource),
            ),
            ServerError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                "ERR_VALIDATION_ERROR".to_string(),
                msg.clone(),
            ),
            ServerError::ModelBackendError(msg) => (
                StatusCode::BAD_GATEWAY,
                "ERR_MODEL_BACKEND_ERROR".to_string(),
                msg.clone(),
            ),
            ServerError::ConfigError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERR_CONFIG_ERROR".to_string(),
                msg.clone(),
            ),
            ServerError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ERR_INTERNAL_SERVER_ERROR".to_string(),
                msg.clone(),
            ),
        };

        let body = Json(json!({
            "error": message,
            "errorDetails": {
                "errorCode": error_code,
                "errorMessage": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_parts(err: ServerError) -> (StatusCode, serde_json::Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn backend_errors_map_to_bad_gateway() {
        let (status, body) =
            response_parts(ServerError::ModelBackendError("endpoint down".into())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["errorDetails"]["errorCode"], "ERR_MODEL_BACKEND_ERROR");
        assert_eq!(body["error"], "endpoint down");
    }

    #[tokio::test]
    async fn validation_errors_map_to_bad_request() {
        let (status, body) =
            response_parts(ServerError::ValidationError("bad provider".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorDetails"]["errorMessage"], "bad provider");
    }
}
