//! # reddit-service
//!
//! Application layer: community creation, membership sync, and sign-up,
//! plus the DTOs the presentation layer reads.

pub mod dto;
pub mod services;

pub use dto::{
    CommunityHeaderView, CommunityResponse, CreateCommunityRequest, MembershipResponse,
    SessionResponse, SignInRequest, SignUpRequest, SnippetResponse,
};
pub use services::{
    AuthService, CommunityService, MembershipService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
