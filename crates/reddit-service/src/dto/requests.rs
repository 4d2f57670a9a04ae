//! Request DTOs
//!
//! Credential requests implement `Validate`; community names are checked by
//! `CommunityName::parse` in the service.

use reddit_core::PrivacyType;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Community Requests
// ============================================================================

/// Create community form
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunityRequest {
    pub name: String,

    #[serde(default)]
    pub privacy_type: PrivacyType,
}

impl CreateCommunityRequest {
    pub fn new(name: impl Into<String>, privacy_type: PrivacyType) -> Self {
        Self {
            name: name.into(),
            privacy_type,
        }
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-up form
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,

    pub confirm_password: String,
}

impl SignUpRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

/// Sign-in form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
