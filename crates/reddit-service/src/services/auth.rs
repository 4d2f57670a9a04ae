//! Authentication service
//!
//! Handles sign-up, sign-in, and sign-out against the identity provider,
//! and keeps the user document and the local community state in step.

use reddit_core::{DomainEvent, UserRecord};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{SessionResponse, SignInRequest, SignUpRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::membership::MembershipService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account and its user document
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<SessionResponse> {
        if !request.passwords_match() {
            return Err(ServiceError::validation("Passwords do not match"));
        }
        request.validate()?;

        let session = self
            .ctx
            .identity()
            .create_user_with_email_and_password(&request.email, &request.password)
            .await?;

        let user = UserRecord::from_session(&session);
        self.ctx.user_repo().create(&user).await?;

        self.ctx.state().set_snippets(Vec::new());

        info!(user_id = %session.uid, "User signed up successfully");

        self.ctx.publish(DomainEvent::user_signed_up(
            session.uid.clone(),
            session.email.clone(),
        ));

        Ok(SessionResponse::from(&session))
    }

    /// Sign in and load the user's community snippets
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<SessionResponse> {
        request.validate()?;

        let session = self
            .ctx
            .identity()
            .sign_in_with_email_and_password(&request.email, &request.password)
            .await?;

        MembershipService::new(self.ctx)
            .get_my_snippets(&session.uid)
            .await?;

        info!(user_id = %session.uid, "User signed in");

        Ok(SessionResponse::from(&session))
    }

    /// Sign out and forget the local community state
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> ServiceResult<()> {
        self.ctx.identity().sign_out().await?;
        self.ctx.state().reset();

        info!("User signed out");
        Ok(())
    }

    pub fn current_session(&self) -> Option<SessionResponse> {
        self.ctx
            .identity()
            .current_session()
            .as_ref()
            .map(SessionResponse::from)
    }
}
