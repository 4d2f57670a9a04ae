//! Entity ↔ document mappers

mod community;
mod snippet;
mod user;

pub use community::{community_from_document, community_to_doc};
pub use snippet::{snippet_from_document, snippet_to_doc};
pub use user::{user_from_document, user_to_doc};

use reddit_core::DomainError;

/// Stored data that no longer satisfies domain rules
pub(crate) fn corrupt(path: &impl std::fmt::Display, err: &DomainError) -> DomainError {
    DomainError::InternalError(format!("corrupt document {path}: {err}"))
}
