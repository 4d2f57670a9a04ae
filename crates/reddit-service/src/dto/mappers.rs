//! Entity to DTO mappers

use reddit_core::{AuthSession, Community, CommunitySnippet};

use super::responses::{CommunityResponse, SessionResponse, SnippetResponse};

impl From<&Community> for CommunityResponse {
    fn from(community: &Community) -> Self {
        Self {
            id: community.id.to_string(),
            creator_id: community.creator_id.to_string(),
            number_of_members: community.number_of_members,
            privacy_type: community.privacy_type,
            image_url: community.image_url.clone(),
            created_at: community.created_at,
        }
    }
}

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        Self::from(&community)
    }
}

impl From<&CommunitySnippet> for SnippetResponse {
    fn from(snippet: &CommunitySnippet) -> Self {
        Self {
            community_id: snippet.community_id.to_string(),
            is_moderator: snippet.is_moderator,
            image_url: snippet.image_url.clone(),
        }
    }
}

impl From<&AuthSession> for SessionResponse {
    fn from(session: &AuthSession) -> Self {
        Self {
            uid: session.uid.to_string(),
            email: session.email.clone(),
        }
    }
}
