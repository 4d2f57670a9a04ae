//! # reddit-cache
//!
//! Client-side state for the presentation layer.
//!
//! ## Features
//!
//! - **Community State**: the "communities I belong to" cache plus the
//!   community currently on screen, published through a `watch` channel
//! - **Request Guard**: one in-flight create/join/leave request per client
//! - **Pub/Sub**: in-process broadcast of committed domain events
//!
//! ## Example
//!
//! ```ignore
//! use reddit_cache::{CommunityStateStore, Publisher};
//!
//! let state = CommunityStateStore::new();
//! let mut updates = state.subscribe();
//!
//! let guard = state.begin_request()?;   // button shows a spinner
//! state.upsert_snippet(snippet);
//! drop(guard);
//!
//! updates.changed().await?;
//! let joined = updates.borrow().is_member(&name);
//! ```

pub mod pubsub;
pub mod state;

// Re-export state types
pub use state::{CommunityState, CommunityStateStore, RequestGuard, StateError};

// Re-export pubsub types
pub use pubsub::{PublishError, Publisher, DEFAULT_CAPACITY};
