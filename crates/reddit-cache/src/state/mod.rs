//! Local community state

mod community_state;

pub use community_state::{CommunityState, CommunityStateStore, RequestGuard, StateError};
