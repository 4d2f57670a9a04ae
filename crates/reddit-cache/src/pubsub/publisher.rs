//! Domain event publisher.
//!
//! Fans committed domain events out to every subscriber over a
//! `tokio::sync::broadcast` channel. Slow subscribers lose the oldest events.

use reddit_core::DomainEvent;
use tokio::sync::broadcast;
use tracing::debug;

/// Events buffered per subscriber before the oldest are dropped
pub const DEFAULT_CAPACITY: usize = 256;

/// Publish errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("No active subscribers for {0}")]
    NoSubscribers(&'static str),
}

/// Broadcast publisher for domain events
#[derive(Debug, Clone)]
pub struct Publisher {
    tx: broadcast::Sender<DomainEvent>,
}

impl Publisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event; returns the number of subscribers reached
    pub fn publish(&self, event: DomainEvent) -> Result<usize, PublishError> {
        let event_type = event.event_type();
        match self.tx.send(event) {
            Ok(receivers) => {
                debug!(event_type, receivers, "Event published");
                Ok(receivers)
            }
            Err(_) => Err(PublishError::NoSubscribers(event_type)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reddit_core::{CommunityName, UserId};

    fn event() -> DomainEvent {
        DomainEvent::member_left(
            CommunityName::parse("rust").unwrap(),
            UserId::parse("u1").unwrap(),
            0,
        )
    }

    #[test]
    fn test_publish_without_subscribers() {
        let publisher = Publisher::default();
        assert_eq!(
            publisher.publish(event()),
            Err(PublishError::NoSubscribers("MEMBER_LEFT"))
        );
    }

    #[tokio::test]
    async fn test_publish_reaches_all_subscribers() {
        let publisher = Publisher::default();
        let mut a = publisher.subscribe();
        let mut b = publisher.subscribe();
        assert_eq!(publisher.subscriber_count(), 2);

        let sent = event();
        assert_eq!(publisher.publish(sent.clone()).unwrap(), 2);
        assert_eq!(a.recv().await.unwrap(), sent);
        assert_eq!(b.recv().await.unwrap(), sent);
    }
}
