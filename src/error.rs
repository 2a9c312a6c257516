//! Application error types with HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Application-level errors for the explorer.
#[derive(Error, Debug)]
pub enum AppError {
    // Store errors
    #[error("Graph store error: {0}")]
    Store(String),

    #[error("SPARQL query error: {message}")]
    Query { message: String, query: String },

    #[error("Row decode error: {0}")]
    Decode(String),

    #[error("Failed to load {path}: {message}")]
    Load { path: String, message: String },

    #[error("Query did not complete within {millis}ms")]
    Timeout { millis: u64 },

    // Domain errors
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a detail lookup that resolved to nothing.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(_)
            | AppError::Query { .. }
            | AppError::Decode(_)
            | AppError::Load { .. }
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::NotFound { kind, .. } => format!("{} not found", kind),
            other => other.to_string(),
        };

        if status.is_server_error() {
            match &self {
                AppError::Query { message, query } => {
                    tracing::error!(%message, %query, "query failed");
                }
                other => tracing::error!(error = %other, "request failed"),
            }
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
