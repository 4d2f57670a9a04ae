//! Data transfer objects
//!
//! - Request DTOs with input validation
//! - Response DTOs and view models for the presentation layer
//! - `From` conversions from domain entities

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateCommunityRequest, SignInRequest, SignUpRequest};

pub use responses::{
    CommunityHeaderView, CommunityResponse, MembershipResponse, SessionResponse, SnippetResponse,
};
