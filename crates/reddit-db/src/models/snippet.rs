use serde::{Deserialize, Serialize};

/// `users/{uid}/communitySnippets/{name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetDoc {
    pub community_id: String,
    pub is_moderator: bool,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
