//! # reddit-db
//!
//! Document store layer implementing the store and repository ports from `reddit-core`.
//!
//! ## Overview
//!
//! - In-memory transactional document store with optimistic concurrency
//! - Document models with the stored field names (`creatorId`, `numberOfMembers`, ...)
//! - Entity ↔ document mappers
//! - Repository implementations over any [`reddit_core::DocumentStore`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use reddit_db::{MemoryDocumentStore, StoreCommunityRepository};
//! use reddit_core::CommunityRepository;
//!
//! let store = Arc::new(MemoryDocumentStore::new());
//! let communities = StoreCommunityRepository::new(store.clone());
//! let rust = communities.find_by_name(&name).await?;
//! ```

pub mod mappers;
pub mod models;
pub mod repositories;
pub mod store;

// Re-export commonly used types
pub use models::{CommunityDoc, SnippetDoc, UserDoc};
pub use repositories::{StoreCommunityRepository, StoreSnippetRepository, StoreUserRepository};
pub use store::{MemoryDocumentStore, MemoryStoreConfig};
