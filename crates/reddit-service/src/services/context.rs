//! Service context - dependency container for services
//!
//! Holds the store and identity ports, the typed repositories, the local
//! community state, and the event publisher. One context per client.

use std::sync::Arc;

use reddit_cache::{CommunityStateStore, Publisher};
use reddit_common::{AppConfig, MemoryIdentityProvider};
use reddit_core::traits::{
    CommunityRepository, DocumentStore, IdentityProvider, SnippetRepository, UserRepository,
};
use reddit_core::{DomainEvent, UserId};
use reddit_db::{
    MemoryDocumentStore, StoreCommunityRepository, StoreSnippetRepository, StoreUserRepository,
};
use tracing::debug;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    config: Arc<AppConfig>,

    // Backend ports
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,

    // Repositories
    community_repo: Arc<dyn CommunityRepository>,
    snippet_repo: Arc<dyn SnippetRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Local state
    state: CommunityStateStore,

    // Pub/Sub
    publisher: Publisher,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Context over a fresh in-memory store and identity provider
    pub fn in_memory(config: AppConfig) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let identity = Arc::new(MemoryIdentityProvider::new(config.auth.min_password_length));
        let community_repo = Arc::new(StoreCommunityRepository::new(Arc::clone(&store)));
        let snippet_repo = Arc::new(StoreSnippetRepository::new(Arc::clone(&store)));
        let user_repo = Arc::new(StoreUserRepository::new(Arc::clone(&store)));

        Self {
            config: Arc::new(config),
            store,
            identity,
            community_repo,
            snippet_repo,
            user_repo,
            state: CommunityStateStore::new(),
            publisher: Publisher::default(),
        }
    }

    // === Configuration ===

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn max_transaction_attempts(&self) -> u32 {
        self.config.store.max_transaction_attempts
    }

    // === Backend Ports ===

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    /// Whether `user_id` is the user signed in on this client
    ///
    /// Only that user's memberships belong in the local state.
    pub fn is_signed_in_as(&self, user_id: &UserId) -> bool {
        self.identity
            .current_session()
            .is_some_and(|session| session.uid == *user_id)
    }

    // === Repositories ===

    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    pub fn snippet_repo(&self) -> &dyn SnippetRepository {
        self.snippet_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Local State ===

    pub fn state(&self) -> &CommunityStateStore {
        &self.state
    }

    // === Pub/Sub ===

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Publish an event; nobody listening is not an error
    pub fn publish(&self, event: DomainEvent) {
        if let Err(e) = self.publisher.publish(event) {
            debug!(error = %e, "Event dropped");
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("config", &self.config)
            .field("store", &"dyn DocumentStore")
            .field("identity", &"dyn IdentityProvider")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom backends
///
/// Repositories default to the store-backed implementations over the
/// configured store; the state store and publisher default to fresh ones.
#[derive(Default)]
pub struct ServiceContextBuilder {
    config: Option<AppConfig>,
    store: Option<Arc<dyn DocumentStore>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    community_repo: Option<Arc<dyn CommunityRepository>>,
    snippet_repo: Option<Arc<dyn SnippetRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    state: Option<CommunityStateStore>,
    publisher: Option<Publisher>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn snippet_repo(mut self, repo: Arc<dyn SnippetRepository>) -> Self {
        self.snippet_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn state(mut self, state: CommunityStateStore) -> Self {
        self.state = Some(state);
        self
    }

    pub fn publisher(mut self, publisher: Publisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the store or identity provider is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let store = self
            .store
            .ok_or_else(|| ServiceError::validation("store is required"))?;
        let identity = self
            .identity
            .ok_or_else(|| ServiceError::validation("identity is required"))?;

        let community_repo = self.community_repo.unwrap_or_else(|| {
            Arc::new(StoreCommunityRepository::new(Arc::clone(&store)))
        });
        let snippet_repo = self
            .snippet_repo
            .unwrap_or_else(|| Arc::new(StoreSnippetRepository::new(Arc::clone(&store))));
        let user_repo = self
            .user_repo
            .unwrap_or_else(|| Arc::new(StoreUserRepository::new(Arc::clone(&store))));

        Ok(ServiceContext {
            config: Arc::new(self.config.unwrap_or_default()),
            store,
            identity,
            community_repo,
            snippet_repo,
            user_repo,
            state: self.state.unwrap_or_default(),
            publisher: self.publisher.unwrap_or_default(),
        })
    }
}
