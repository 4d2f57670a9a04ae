//! Test helpers
//!
//! A [`TestBackend`] is the shared "hosted" side: one document store, one
//! identity provider, one event bus. Each [`TestBackend::client`] is a
//! separate browser tab with its own local community state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reddit_cache::Publisher;
use reddit_common::{try_init_tracing_with_config, AppConfig, MemoryIdentityProvider, TracingConfig};
use reddit_core::{
    CollectionPath, Document, DocumentPath, DocumentStore, StoreError, StoreResult, Transaction,
    UserId,
};
use reddit_db::{MemoryDocumentStore, MemoryStoreConfig};
use reddit_service::{AuthService, ServiceContext};
use tracing::{debug, Level};

use crate::fixtures::TestAccount;

/// Install a test subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let config = TracingConfig {
        level: Level::WARN,
        file_line: false,
        ..TracingConfig::development()
    };
    let _ = try_init_tracing_with_config(config);
}

/// Shared backend for a group of clients
pub struct TestBackend {
    pub config: AppConfig,
    pub store: Arc<MemoryDocumentStore>,
    pub identity: Arc<MemoryIdentityProvider>,
    pub publisher: Publisher,
    commits: Arc<CommitSwitch>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self::with_store_config(AppConfig::default(), MemoryStoreConfig::default())
    }

    /// Every read takes `latency`, so concurrent transactions interleave
    pub fn with_read_latency(latency: Duration) -> Self {
        Self::with_store_config(
            AppConfig::default(),
            MemoryStoreConfig {
                read_latency: Some(latency),
            },
        )
    }

    pub fn with_store_config(config: AppConfig, store_config: MemoryStoreConfig) -> Self {
        init_test_tracing();
        let identity = Arc::new(MemoryIdentityProvider::new(config.auth.min_password_length));
        Self {
            config,
            store: Arc::new(MemoryDocumentStore::with_config(store_config)),
            identity,
            publisher: Publisher::default(),
            commits: Arc::new(CommitSwitch::default()),
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.config.store.max_transaction_attempts = attempts;
        self
    }

    /// A new client with empty local state
    pub fn client(&self) -> Result<ServiceContext> {
        let store = Arc::new(SwitchedStore {
            inner: Arc::clone(&self.store),
            commits: Arc::clone(&self.commits),
        });
        Ok(ServiceContext::builder()
            .config(self.config.clone())
            .store(store)
            .identity(Arc::clone(&self.identity) as Arc<dyn reddit_core::IdentityProvider>)
            .publisher(self.publisher.clone())
            .build()?)
    }

    /// Make commits fail while reads keep working
    pub fn reject_commits(&self, reject: bool) {
        self.commits.reject.store(reject, Ordering::SeqCst);
    }
}

/// Sign up a fresh account on `ctx` and return its uid
pub async fn sign_up_new_user(ctx: &ServiceContext) -> Result<UserId> {
    let session = AuthService::new(ctx)
        .sign_up(TestAccount::unique().sign_up_request())
        .await?;
    Ok(UserId::parse(session.uid)?)
}

impl Default for TestBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct CommitSwitch {
    reject: AtomicBool,
}

/// Store wrapper that can refuse commits
struct SwitchedStore {
    inner: Arc<MemoryDocumentStore>,
    commits: Arc<CommitSwitch>,
}

#[async_trait]
impl DocumentStore for SwitchedStore {
    async fn get(&self, path: &DocumentPath) -> StoreResult<Option<Document>> {
        self.inner.get(path).await
    }

    async fn list(&self, collection: &CollectionPath) -> StoreResult<Vec<Document>> {
        self.inner.list(collection).await
    }

    async fn commit(&self, tx: Transaction) -> StoreResult<()> {
        if self.commits.reject.load(Ordering::SeqCst) {
            debug!(writes = tx.writes().len(), "Commit rejected");
            return Err(StoreError::Unavailable(
                "The service is currently unavailable.".to_string(),
            ));
        }
        self.inner.commit(tx).await
    }
}
