//! Value objects - immutable domain primitives

mod community_name;
mod path;
mod privacy_type;
mod user_id;

pub use community_name::{
    chars_remaining, CommunityName, INVALID_NAME_MESSAGE, MAX_COMMUNITY_NAME_LEN,
    MIN_COMMUNITY_NAME_LEN, SPECIAL_CHARACTERS,
};
pub use path::{CollectionPath, DocumentPath, COMMUNITIES, COMMUNITY_SNIPPETS, USERS};
pub use privacy_type::PrivacyType;
pub use user_id::UserId;
