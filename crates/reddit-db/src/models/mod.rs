//! Stored document shapes
//!
//! Field names match what is persisted in the document store.

mod community;
mod snippet;
mod user;

pub use community::CommunityDoc;
pub use snippet::SnippetDoc;
pub use user::UserDoc;
