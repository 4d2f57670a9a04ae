//! Membership snippet - a user's denormalized record of one community

use crate::entities::Community;
use crate::value_objects::CommunityName;

/// Per-user membership record stored under `users/{uid}/communitySnippets`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunitySnippet {
    pub community_id: CommunityName,
    pub is_moderator: bool,
    pub image_url: Option<String>,
}

impl CommunitySnippet {
    /// Snippet written for the creator together with the community
    pub fn moderator(community_id: CommunityName) -> Self {
        Self {
            community_id,
            is_moderator: true,
            image_url: None,
        }
    }

    /// Snippet written when a user joins an existing community
    pub fn member_of(community: &Community) -> Self {
        Self {
            community_id: community.id.clone(),
            is_moderator: false,
            image_url: community.image_url.clone(),
        }
    }
}
