//! Error handling utilities for API responses.
//!
//! Provides the standard JSON envelope used by every endpoint and the
//! conversion from viewer errors to HTTP responses.
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `message`: Human-readable message
//! - `error.error_type`: Machine-readable error category

use crate::errors::ViewerError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Response timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Converts ViewerError to appropriate HTTP response with standard format
pub fn viewer_error_to_http(error: ViewerError) -> (StatusCode, String) {
    let status = match &error {
        ViewerError::InvalidOrigin { .. }
        | ViewerError::EmptySources
        | ViewerError::DuplicateSourceName { .. }
        | ViewerError::InvalidSource { .. } => StatusCode::BAD_REQUEST,
        ViewerError::Render { message } => {
            tracing::error!("Viewer render error: {}", message);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let error_response = ApiResponse::<()>::error(error.to_string(), error.error_type());
    (
        status,
        serde_json::to_string(&error_response).unwrap_or_default(),
    )
}
