//! # reddit-core
//!
//! Domain layer containing entities, value objects, store/identity ports, and domain events.
//! This crate has zero dependencies on infrastructure (document store SDK, identity SDK, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AuthSession, Community, CommunitySnippet, UserRecord};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    CommunityRepository, Document, DocumentData, DocumentStore, IdentityProvider, RepoResult,
    SnippetRepository, StoreError, StoreResult, Transaction, UserRepository, WriteOp,
};
pub use value_objects::{
    chars_remaining, CollectionPath, CommunityName, DocumentPath, PrivacyType, UserId,
    MAX_COMMUNITY_NAME_LEN, MIN_COMMUNITY_NAME_LEN,
};
