//! Repository traits - typed, non-transactional access to stored documents
//!
//! Transactional writes go through [`crate::traits::Transaction`] directly;
//! these traits cover the plain reads and single-document writes.

use async_trait::async_trait;

use crate::entities::{Community, CommunitySnippet, UserRecord};
use crate::error::DomainError;
use crate::value_objects::{CommunityName, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Find community by name
    async fn find_by_name(&self, name: &CommunityName) -> RepoResult<Option<Community>>;

    /// List every community, ordered by name
    async fn list(&self) -> RepoResult<Vec<Community>>;
}

#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Find a single membership snippet
    async fn find(&self, user_id: &UserId, name: &CommunityName)
        -> RepoResult<Option<CommunitySnippet>>;

    /// List all membership snippets of a user
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<CommunitySnippet>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Write the user profile document
    async fn create(&self, user: &UserRecord) -> RepoResult<()>;

    /// Find user profile by uid
    async fn find_by_id(&self, uid: &UserId) -> RepoResult<Option<UserRecord>>;
}
