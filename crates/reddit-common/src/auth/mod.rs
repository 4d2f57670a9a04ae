//! Authentication utilities

mod identity;
mod password;

pub use identity::MemoryIdentityProvider;
pub use password::{hash_password, validate_password_strength, verify_password, PasswordService};
