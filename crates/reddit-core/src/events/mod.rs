//! Domain events

mod domain_event;

pub use domain_event::{
    CommunityCreatedEvent, DomainEvent, MemberJoinedEvent, MemberLeftEvent, UserSignedUpEvent,
};
