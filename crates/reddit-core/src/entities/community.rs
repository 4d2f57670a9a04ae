//! Community entity - a named discussion space

use chrono::{DateTime, Utc};

use crate::value_objects::{CommunityName, PrivacyType, UserId};

/// Community entity, keyed by its unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: CommunityName,
    pub creator_id: UserId,
    pub number_of_members: u32,
    pub privacy_type: PrivacyType,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Community {
    /// Create a new community; the creator is its first member
    pub fn new(id: CommunityName, creator_id: UserId, privacy_type: PrivacyType) -> Self {
        Self {
            id,
            creator_id,
            number_of_members: 1,
            privacy_type,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_creator(&self, user_id: &UserId) -> bool {
        self.creator_id == *user_id
    }

    pub fn add_member(&mut self) {
        self.number_of_members = self.number_of_members.saturating_add(1);
    }

    /// Member count never goes below zero
    pub fn remove_member(&mut self) {
        self.number_of_members = self.number_of_members.saturating_sub(1);
    }
}
