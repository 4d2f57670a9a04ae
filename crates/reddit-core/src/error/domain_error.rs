//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::CommunityName;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationFailed(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password should be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("Invalid document path: {0}")]
    InvalidPath(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Sorry, r/{0} is taken.")]
    NameTaken(CommunityName),

    #[error("A user with that email already exists")]
    EmailAlreadyInUse,

    // =========================================================================
    // Not Found / Credential Errors
    // =========================================================================
    #[error("Community not found: {0}")]
    CommunityNotFound(String),

    #[error("No user found with that email")]
    UserNotFound,

    #[error("Invalid password")]
    WrongPassword,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Transport, auth, or store failure; the message is shown verbatim
    #[error("{0}")]
    BackendUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::InvalidPath(_) => "INVALID_PATH",
            Self::NameTaken(_) => "NAME_TAKEN",
            Self::EmailAlreadyInUse => "EMAIL_ALREADY_IN_USE",
            Self::CommunityNotFound(_) => "UNKNOWN_COMMUNITY",
            Self::UserNotFound => "UNKNOWN_USER",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed(_)
                | Self::InvalidEmail
                | Self::WeakPassword { .. }
                | Self::InvalidPath(_)
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::NameTaken(_) | Self::EmailAlreadyInUse)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CommunityNotFound(_) | Self::UserNotFound)
    }

    /// Errors the user can fix by changing their input (shown inline)
    pub fn is_user_correctable(&self) -> bool {
        self.is_validation() || self.is_conflict() || matches!(self, Self::UserNotFound | Self::WrongPassword)
    }
}
