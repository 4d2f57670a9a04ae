//! In-process publish/subscribe for domain events

mod publisher;

pub use publisher::{PublishError, Publisher, DEFAULT_CAPACITY};
