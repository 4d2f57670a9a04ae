//! Domain events - emitted after a write has been committed
//!
//! Consumers use them to refresh views that are not driven by the
//! community state store (e.g. community directories, audit trails).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CommunityName, PrivacyType, UserId};

/// All possible domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    CommunityCreated(CommunityCreatedEvent),
    MemberJoined(MemberJoinedEvent),
    MemberLeft(MemberLeftEvent),
    UserSignedUp(UserSignedUpEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CommunityCreated(_) => "COMMUNITY_CREATED",
            Self::MemberJoined(_) => "MEMBER_JOINED",
            Self::MemberLeft(_) => "MEMBER_LEFT",
            Self::UserSignedUp(_) => "USER_SIGNED_UP",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::CommunityCreated(e) => e.timestamp,
            Self::MemberJoined(e) => e.timestamp,
            Self::MemberLeft(e) => e.timestamp,
            Self::UserSignedUp(e) => e.timestamp,
        }
    }

    /// Community the event belongs to, if any
    pub fn community_id(&self) -> Option<&CommunityName> {
        match self {
            Self::CommunityCreated(e) => Some(&e.community_id),
            Self::MemberJoined(e) => Some(&e.community_id),
            Self::MemberLeft(e) => Some(&e.community_id),
            Self::UserSignedUp(_) => None,
        }
    }

    pub fn community_created(
        community_id: CommunityName,
        creator_id: UserId,
        privacy_type: PrivacyType,
    ) -> Self {
        Self::CommunityCreated(CommunityCreatedEvent {
            community_id,
            creator_id,
            privacy_type,
            timestamp: Utc::now(),
        })
    }

    pub fn member_joined(community_id: CommunityName, user_id: UserId, number_of_members: u32) -> Self {
        Self::MemberJoined(MemberJoinedEvent {
            community_id,
            user_id,
            number_of_members,
            timestamp: Utc::now(),
        })
    }

    pub fn member_left(community_id: CommunityName, user_id: UserId, number_of_members: u32) -> Self {
        Self::MemberLeft(MemberLeftEvent {
            community_id,
            user_id,
            number_of_members,
            timestamp: Utc::now(),
        })
    }

    pub fn user_signed_up(user_id: UserId, email: String) -> Self {
        Self::UserSignedUp(UserSignedUpEvent {
            user_id,
            email,
            timestamp: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityCreatedEvent {
    pub community_id: CommunityName,
    pub creator_id: UserId,
    pub privacy_type: PrivacyType,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberJoinedEvent {
    pub community_id: CommunityName,
    pub user_id: UserId,
    pub number_of_members: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLeftEvent {
    pub community_id: CommunityName,
    pub user_id: UserId,
    pub number_of_members: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSignedUpEvent {
    pub user_id: UserId,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}
