//! In-memory document store
//!
//! Implements the optimistic transaction contract: commit re-checks the
//! version of every document the transaction read, under the write lock,
//! and applies all writes with a single new version or none at all.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use reddit_core::{
    CollectionPath, Document, DocumentData, DocumentPath, DocumentStore, StoreError, StoreResult,
    Transaction, WriteOp,
};
use tracing::{debug, instrument};

const OFFLINE_MESSAGE: &str = "Failed to get document because the client is offline.";

/// Tuning knobs for the in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStoreConfig {
    /// Simulated round-trip delay applied to every read
    pub read_latency: Option<Duration>,
}

#[derive(Debug, Clone)]
struct StoredDocument {
    data: DocumentData,
    version: u64,
    update_time: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    docs: BTreeMap<DocumentPath, StoredDocument>,
    last_version: u64,
}

/// Process-local document store
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    inner: RwLock<Inner>,
    offline: AtomicBool,
    config: MemoryStoreConfig,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MemoryStoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Simulate losing the connection; every call fails while offline
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.inner.read().docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(OFFLINE_MESSAGE.to_string()));
        }
        Ok(())
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.config.read_latency {
            tokio::time::sleep(delay).await;
        }
    }
}

fn snapshot(path: &DocumentPath, stored: &StoredDocument) -> Document {
    Document {
        path: path.clone(),
        data: stored.data.clone(),
        version: stored.version,
        update_time: stored.update_time,
    }
}

/// Stage writes against the current state; `None` marks a deletion
fn stage(
    docs: &BTreeMap<DocumentPath, StoredDocument>,
    writes: Vec<WriteOp>,
) -> StoreResult<BTreeMap<DocumentPath, Option<DocumentData>>> {
    let mut staged: BTreeMap<DocumentPath, Option<DocumentData>> = BTreeMap::new();

    for op in writes {
        match op {
            WriteOp::Set { path, data } => {
                staged.insert(path, Some(data));
            }
            WriteOp::Update { path, fields } => {
                let current = match staged.get(&path) {
                    Some(pending) => pending.clone(),
                    None => docs.get(&path).map(|d| d.data.clone()),
                };
                let Some(mut data) = current else {
                    return Err(StoreError::NotFound(path));
                };
                data.extend(fields);
                staged.insert(path, Some(data));
            }
            WriteOp::Delete { path } => {
                staged.insert(path, None);
            }
        }
    }

    Ok(staged)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    #[instrument(skip(self), level = "debug")]
    async fn get(&self, path: &DocumentPath) -> StoreResult<Option<Document>> {
        self.ensure_online()?;
        self.simulate_latency().await;

        let inner = self.inner.read();
        Ok(inner.docs.get(path).map(|stored| snapshot(path, stored)))
    }

    #[instrument(skip(self), level = "debug")]
    async fn list(&self, collection: &CollectionPath) -> StoreResult<Vec<Document>> {
        self.ensure_online()?;
        self.simulate_latency().await;

        let inner = self.inner.read();
        Ok(inner
            .docs
            .iter()
            .filter(|(path, _)| collection.contains(path))
            .map(|(path, stored)| snapshot(path, stored))
            .collect())
    }

    #[instrument(skip(self, tx), level = "debug")]
    async fn commit(&self, tx: Transaction) -> StoreResult<()> {
        self.ensure_online()?;

        let (reads, writes) = tx.into_parts();
        let mut inner = self.inner.write();

        for (path, seen) in &reads {
            let current = inner.docs.get(path).map(|d| d.version);
            if current != *seen {
                debug!(%path, ?seen, ?current, "Stale read, rejecting commit");
                return Err(StoreError::Contention);
            }
        }

        if writes.is_empty() {
            return Ok(());
        }

        let staged = stage(&inner.docs, writes)?;
        inner.last_version += 1;
        let version = inner.last_version;
        let now = Utc::now();

        for (path, data) in staged {
            match data {
                Some(data) => {
                    inner.docs.insert(
                        path,
                        StoredDocument {
                            data,
                            version,
                            update_time: now,
                        },
                    );
                }
                None => {
                    inner.docs.remove(&path);
                }
            }
        }

        debug!(version, "Transaction committed");
        Ok(())
    }
}
