use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `users/{uid}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub provider_data: Vec<String>,
    pub created_at: DateTime<Utc>,
}
