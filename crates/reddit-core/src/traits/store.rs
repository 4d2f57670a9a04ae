//! Document store port
//!
//! Models a hosted document database addressed by hierarchical paths, with
//! optimistic all-or-nothing transactions: a [`Transaction`] records the
//! version of every document it read and buffers its writes; the store
//! applies the writes only if none of those versions changed in between.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::error::DomainError;
use crate::value_objects::{CollectionPath, DocumentPath};

/// Field map of a stored document
pub type DocumentData = serde_json::Map<String, serde_json::Value>;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a document store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A document read by the transaction changed before commit
    #[error("Transaction aborted: a document it read was modified concurrently")]
    Contention,

    #[error("No document to update: {0}")]
    NotFound(DocumentPath),

    #[error("Transactions require all reads to be executed before all writes")]
    ReadAfterWrite,

    #[error("{0}")]
    Unavailable(String),

    #[error("Malformed document: {0}")]
    Serialization(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Serialization(msg) => Self::InternalError(msg),
            other => Self::BackendUnavailable(other.to_string()),
        }
    }
}

/// A stored document snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: DocumentPath,
    pub data: DocumentData,
    /// Bumped on every committed write to this document
    pub version: u64,
    pub update_time: DateTime<Utc>,
}

impl Document {
    pub fn id(&self) -> &str {
        self.path.id()
    }

    /// Deserialize the document fields into a model
    pub fn decode<T: DeserializeOwned>(&self) -> StoreResult<T> {
        serde_json::from_value(serde_json::Value::Object(self.data.clone()))
            .map_err(|e| StoreError::Serialization(format!("{}: {e}", self.path)))
    }
}

/// Serialize a model into document fields
pub fn encode<T: Serialize>(value: &T) -> StoreResult<DocumentData> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization(format!(
            "documents must be objects, got {other}"
        ))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

/// A buffered write
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    /// Create or overwrite the whole document
    Set { path: DocumentPath, data: DocumentData },
    /// Merge fields into an existing document
    Update { path: DocumentPath, fields: DocumentData },
    /// Remove the document (no-op if absent)
    Delete { path: DocumentPath },
}

impl WriteOp {
    pub fn path(&self) -> &DocumentPath {
        match self {
            Self::Set { path, .. } | Self::Update { path, .. } | Self::Delete { path } => path,
        }
    }
}

/// Read set and write buffer of one transaction attempt
#[derive(Debug, Default)]
pub struct Transaction {
    /// Version observed per read path; `None` means the document was absent
    reads: BTreeMap<DocumentPath, Option<u64>>,
    writes: Vec<WriteOp>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a document through the store and record its version
    pub async fn get(
        &mut self,
        store: &dyn DocumentStore,
        path: &DocumentPath,
    ) -> StoreResult<Option<Document>> {
        if !self.writes.is_empty() {
            return Err(StoreError::ReadAfterWrite);
        }

        let doc = store.get(path).await?;
        self.reads
            .insert(path.clone(), doc.as_ref().map(|d| d.version));
        Ok(doc)
    }

    pub fn set<T: Serialize>(&mut self, path: &DocumentPath, value: &T) -> StoreResult<()> {
        let data = encode(value)?;
        self.writes.push(WriteOp::Set {
            path: path.clone(),
            data,
        });
        Ok(())
    }

    pub fn update(&mut self, path: &DocumentPath, fields: DocumentData) {
        self.writes.push(WriteOp::Update {
            path: path.clone(),
            fields,
        });
    }

    pub fn delete(&mut self, path: &DocumentPath) {
        self.writes.push(WriteOp::Delete { path: path.clone() });
    }

    pub fn reads(&self) -> &BTreeMap<DocumentPath, Option<u64>> {
        &self.reads
    }

    pub fn writes(&self) -> &[WriteOp] {
        &self.writes
    }

    pub fn is_read_only(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn into_parts(self) -> (BTreeMap<DocumentPath, Option<u64>>, Vec<WriteOp>) {
        (self.reads, self.writes)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document
    async fn get(&self, path: &DocumentPath) -> StoreResult<Option<Document>>;

    /// Fetch every document directly inside a collection, ordered by id
    async fn list(&self, collection: &CollectionPath) -> StoreResult<Vec<Document>>;

    /// Atomically validate the read set and apply the writes
    ///
    /// # Errors
    /// `StoreError::Contention` if any read version is stale; nothing is written.
    async fn commit(&self, tx: Transaction) -> StoreResult<()>;

    /// Write a single document outside of any transaction
    async fn set_document(&self, path: &DocumentPath, data: DocumentData) -> StoreResult<()> {
        let mut tx = Transaction::new();
        tx.writes.push(WriteOp::Set {
            path: path.clone(),
            data,
        });
        self.commit(tx).await
    }
}
