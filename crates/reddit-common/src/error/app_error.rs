//! Application error types
//!
//! Everything above the domain layer reports through [`AppError`]; domain
//! errors pass through unchanged so their messages stay user-facing.

use reddit_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("You must be signed in to do that")]
    MissingAuth,

    #[error("{0}")]
    Validation(String),

    /// The request collides with one already running
    #[error("{0}")]
    Conflict(String),

    /// Details are logged, never shown
    #[error("Something went wrong")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAuth => "MISSING_AUTH",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Whether the user can fix this by changing their input
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::MissingAuth | Self::Conflict(_) | Self::Internal(_) => false,
            Self::Domain(e) => e.is_user_correctable(),
        }
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error as rendered inline next to the control that failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
