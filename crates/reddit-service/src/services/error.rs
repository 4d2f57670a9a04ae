//! Service layer error types
//!
//! Every failure a caller can see ends up here, and `display_message` turns
//! it into the string shown inline in the form or button.

use reddit_cache::StateError;
use reddit_common::{AppError, ErrorResponse};
use reddit_core::{DomainError, StoreError};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or backend failure
    Domain(DomainError),

    /// Application error (credentials, configuration, ...)
    App(AppError),

    /// The action needs a signed-in user
    AuthRequired,

    /// This client already has a create/join/leave request in flight
    RequestInFlight,

    /// Form input rejected before any backend call
    Validation(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::AuthRequired => write!(f, "Authentication required"),
            Self::RequestInFlight => write!(f, "Another request is already in progress"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Message shown to the user next to the control that failed
    pub fn display_message(&self) -> String {
        match self {
            Self::Domain(e) => e.to_string(),
            Self::App(e) => e.to_string(),
            Self::AuthRequired => "You must be signed in to do that".to_string(),
            Self::RequestInFlight => self.to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Internal(_) => "Something went wrong".to_string(),
        }
    }

    /// Code and inline message for the presentation layer
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.display_message())
    }

    /// Get the error code
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::AuthRequired => "AUTH_REQUIRED",
            Self::RequestInFlight => "REQUEST_IN_FLIGHT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the user can fix this by changing their input
    pub fn is_user_correctable(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_user_correctable(),
            Self::App(e) => e.is_user_correctable(),
            Self::Validation(_) => true,
            Self::AuthRequired | Self::RequestInFlight | Self::Internal(_) => false,
        }
    }

    pub fn is_name_taken(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NameTaken(_)))
    }

    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::Domain(DomainError::BackendUnavailable(_)))
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => Self::Domain(e),
            other => Self::App(other),
        }
    }
}

impl From<StateError> for ServiceError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::RequestInFlight => Self::RequestInFlight,
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| errors.to_string());
        Self::Validation(message)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::AuthRequired => AppError::MissingAuth,
            ServiceError::RequestInFlight => AppError::Conflict(err.to_string()),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
