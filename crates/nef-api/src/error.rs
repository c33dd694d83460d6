//! API error handling
//!
//! Author: hephaex@gmail.com

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code
    #[schema(example = "MODEL_ERROR")]
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn internal_error() -> Self {
        Self::new("INTERNAL_ERROR", "Internal server error")
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Model(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Model(msg) => {
                tracing::error!(error = %msg, "Entity model failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("MODEL_ERROR", "Entity extraction failed").with_details(msg),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal_error().with_details(msg),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<nef_core::NefError> for AppError {
    fn from(err: nef_core::NefError) -> Self {
        use nef_core::NefError;

        match err {
            NefError::Model(msg) => AppError::Model(msg),
            NefError::InvalidInput(msg) => AppError::Internal(format!("Invalid input: {msg}")),
            NefError::ConfigError(msg) => AppError::Internal(format!("Configuration error: {msg}")),
            NefError::Io(err) => AppError::Internal(format!("I/O error: {err}")),
            NefError::Other(err) => AppError::Internal(err.to_string()),
        }
    }
}
