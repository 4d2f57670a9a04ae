//! Business logic services
//!
//! Each service borrows a [`ServiceContext`] and exposes one use case per
//! method. Writes that touch more than one document go through
//! [`run_transaction`].

pub mod auth;
pub mod community;
pub mod context;
pub mod error;
pub mod membership;
pub mod transaction;

pub use auth::AuthService;
pub use community::CommunityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use membership::MembershipService;
pub use transaction::{run_transaction, TxOutcome};
