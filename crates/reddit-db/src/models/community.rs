use chrono::{DateTime, Utc};
use reddit_core::PrivacyType;
use serde::{Deserialize, Serialize};

/// `communities/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDoc {
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
    pub number_of_members: u32,
    pub privacy_type: PrivacyType,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
