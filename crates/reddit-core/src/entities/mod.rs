//! Domain entities - core business objects

mod community;
mod snippet;
mod user;

pub use community::Community;
pub use snippet::CommunitySnippet;
pub use user::{AuthSession, UserRecord};
