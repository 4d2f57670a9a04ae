//! Repository implementations over a document store

mod community;
mod error;
mod snippet;
mod user;

pub use community::StoreCommunityRepository;
pub use error::map_store_error;
pub use snippet::StoreSnippetRepository;
pub use user::StoreUserRepository;
