//! Identity provider port

use async_trait::async_trait;

use crate::entities::AuthSession;
use crate::error::DomainError;

/// Issues and validates user credentials.
///
/// Mirrors a client-side auth SDK: a successful sign-up or sign-in also
/// becomes the current session.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError>;

    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError>;

    async fn sign_out(&self) -> Result<(), DomainError>;

    /// The signed-in user, if any
    fn current_session(&self) -> Option<AuthSession>;
}
