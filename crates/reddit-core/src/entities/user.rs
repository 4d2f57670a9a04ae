//! User identity as seen by this system

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Signed-in session handed out by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub uid: UserId,
    pub email: String,
}

/// User profile document written after sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub uid: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub provider_data: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Profile for an email/password account
    pub fn from_session(session: &AuthSession) -> Self {
        Self {
            uid: session.uid.clone(),
            email: session.email.clone(),
            display_name: None,
            provider_data: vec!["password".to_string()],
            created_at: Utc::now(),
        }
    }
}
