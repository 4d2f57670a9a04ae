//! Ports - interfaces implemented by the infrastructure layer

mod identity;
mod repositories;
mod store;

pub use identity::IdentityProvider;
pub use repositories::{CommunityRepository, RepoResult, SnippetRepository, UserRepository};
pub use store::{
    encode, Document, DocumentData, DocumentStore, StoreError, StoreResult, Transaction, WriteOp,
};
