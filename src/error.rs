use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::ConnectionError;

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every failure a handler can hit maps to one of these variants, which in
/// turn decide the HTTP status and the `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// No database connection string configured
    Configuration,
    /// Database unreachable or timed out
    Connectivity(anyhow::Error),
    /// Malformed write payload
    Validation(String),
    /// Driver error while running an insert or query
    Operation {
        action: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn operation(action: &'static str, source: impl Into<anyhow::Error>) -> Self {
        ApiError::Operation {
            action,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Configuration
            | ApiError::Connectivity(_)
            | ApiError::Operation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Configuration => "Database not connected".to_string(),
            ApiError::Connectivity(err) => format!("Database not connected: {:#}", err),
            ApiError::Validation(msg) => format!("Invalid item payload: {}", msg),
            ApiError::Operation { action, source } => {
                format!("Failed to {}: {:#}", action, source)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.message();
        if status.is_server_error() {
            tracing::error!("{}", error);
        } else {
            tracing::warn!("{}", error);
        }

        let body = Json(ErrorResponse { error });

        (status, body).into_response()
    }
}

impl From<ConnectionError> for ApiError {
    fn from(err: ConnectionError) -> Self {
        match err {
            ConnectionError::NotConfigured => ApiError::Configuration,
            ConnectionError::Unreachable(e) => ApiError::Connectivity(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
