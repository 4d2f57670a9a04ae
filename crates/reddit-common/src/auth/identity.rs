//! In-memory identity provider
//!
//! Email/password accounts held in process, with Argon2id hashed passwords.
//! Stands in for the hosted identity service in tests and local runs.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use reddit_core::{AuthSession, DomainError, IdentityProvider, UserId};
use tracing::{debug, info, instrument};
use validator::ValidateEmail;

use super::password::PasswordService;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct Account {
    uid: UserId,
    email: String,
    password_hash: String,
}

/// Process-local identity provider
#[derive(Debug)]
pub struct MemoryIdentityProvider {
    /// Keyed by lowercased email
    accounts: DashMap<String, Account>,
    session: RwLock<Option<AuthSession>>,
    passwords: PasswordService,
    offline: AtomicBool,
}

impl MemoryIdentityProvider {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            accounts: DashMap::new(),
            session: RwLock::new(None),
            passwords: PasswordService::new(min_password_length),
            offline: AtomicBool::new(false),
        }
    }

    /// Simulate a network outage; every call fails while offline
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn ensure_online(&self) -> Result<(), DomainError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::BackendUnavailable(
                "A network error has occurred".to_string(),
            ));
        }
        Ok(())
    }

    fn start_session(&self, account: &Account) -> AuthSession {
        let session = AuthSession {
            uid: account.uid.clone(),
            email: account.email.clone(),
        };
        *self.session.write() = Some(session.clone());
        session
    }
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new(6)
    }
}

fn into_domain(err: AppError) -> DomainError {
    match err {
        AppError::Domain(e) => e,
        other => DomainError::InternalError(other.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    #[instrument(skip(self, password))]
    async fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError> {
        self.ensure_online()?;

        if !email.validate_email() {
            return Err(DomainError::InvalidEmail);
        }
        let password_hash = self.passwords.hash(password).map_err(into_domain)?;

        let account = match self.accounts.entry(email.to_lowercase()) {
            Entry::Occupied(_) => return Err(DomainError::EmailAlreadyInUse),
            Entry::Vacant(slot) => {
                let uid = UserId::parse(uuid::Uuid::new_v4().simple().to_string())?;
                slot.insert(Account {
                    uid,
                    email: email.to_string(),
                    password_hash,
                })
                .clone()
            }
        };

        info!(uid = %account.uid, "Account created");
        Ok(self.start_session(&account))
    }

    #[instrument(skip(self, password))]
    async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, DomainError> {
        self.ensure_online()?;

        let account = self
            .accounts
            .get(&email.to_lowercase())
            .map(|a| a.value().clone())
            .ok_or(DomainError::UserNotFound)?;

        self.passwords
            .verify_or_error(password, &account.password_hash)
            .map_err(into_domain)?;

        debug!(uid = %account.uid, "Signed in");
        Ok(self.start_session(&account))
    }

    async fn sign_out(&self) -> Result<(), DomainError> {
        self.session.write().take();
        Ok(())
    }

    fn current_session(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }
}
