//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid or missing module type. Accepted values are \"backend\" and \"frontend\"")]
    InvalidModuleType,

    #[error("Missing module id")]
    MissingModuleId,

    // Resource errors
    #[error("No documentation for this module was found")]
    ModuleNotFound,

    // Artifact errors
    #[error("Documentation artifact could not be read")]
    Io(#[from] std::io::Error),

    #[error("Invalid documentation artifact: {0}")]
    InvalidArtifact(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidModuleType | AppError::MissingModuleId => StatusCode::BAD_REQUEST,
            AppError::ModuleNotFound => StatusCode::NOT_FOUND,
            AppError::Io(_) | AppError::InvalidArtifact(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Hide details for internal errors
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "Internal server error".to_string()
            }
            AppError::InvalidArtifact(detail) => {
                tracing::error!("Invalid documentation artifact: {}", detail);
                "Internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }

            // Show full message for client errors
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Errors travel to the client as plain text, body equal to the message
        (self.status(), self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn invalid_artifact(msg: impl Into<String>) -> Self {
        AppError::InvalidArtifact(msg.into())
    }
}
