//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use reddit_core::{CommunityName, PrivacyType, UserId};
use reddit_service::{CreateCommunityRequest, SignInRequest, SignUpRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A community name no other test uses
pub fn unique_community_name() -> String {
    format!("community_{}", unique_suffix())
}

/// A user id no other test uses
pub fn unique_user_id() -> UserId {
    UserId::parse(format!("user{}", unique_suffix())).expect("valid user id")
}

pub fn community_name(raw: &str) -> CommunityName {
    CommunityName::parse(raw).expect("valid community name")
}

pub fn create_request(name: &str) -> CreateCommunityRequest {
    CreateCommunityRequest::new(name, PrivacyType::Public)
}

/// Sign-up form with matching passwords
pub struct TestAccount {
    pub email: String,
    pub password: String,
}

impl TestAccount {
    pub fn unique() -> Self {
        Self {
            email: format!("test{}@example.com", unique_suffix()),
            password: "TestPass123!".to_string(),
        }
    }

    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest::new(&self.email, &self.password, &self.password)
    }

    pub fn sign_in_request(&self) -> SignInRequest {
        SignInRequest::new(&self.email, &self.password)
    }
}
