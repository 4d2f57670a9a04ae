//! Response DTOs and view models

use chrono::{DateTime, Utc};
use reddit_core::PrivacyType;
use serde::Serialize;

// ============================================================================
// Community Responses
// ============================================================================

/// Community as rendered on its page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityResponse {
    pub id: String,
    pub creator_id: String,
    pub number_of_members: u32,
    pub privacy_type: PrivacyType,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of the "communities I belong to" list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetResponse {
    pub community_id: String,
    pub is_moderator: bool,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Outcome of a join or leave
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub community_id: String,
    pub is_member: bool,
    /// Member count after the write; `None` if the community no longer exists
    pub number_of_members: Option<u32>,
    /// False when the request was a no-op
    pub changed: bool,
    /// The user's full membership set after the write
    pub memberships: Vec<SnippetResponse>,
}

// ============================================================================
// View Models
// ============================================================================

/// Community page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityHeaderView {
    pub title: String,
    pub subtitle: String,
    pub button_label: &'static str,
    /// Joined communities render an outline button
    pub outlined: bool,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_joined: bool,
    pub loading: bool,
}

impl CommunityHeaderView {
    pub fn new(community: &CommunityResponse, is_joined: bool, loading: bool) -> Self {
        Self {
            title: community.id.clone(),
            subtitle: format!("r/{}", community.id),
            button_label: if is_joined { "Joined" } else { "Join" },
            outlined: is_joined,
            image_url: community.image_url.clone(),
            is_joined,
            loading,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponse {
    pub uid: String,
    pub email: String,
}
