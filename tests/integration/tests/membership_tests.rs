//! Membership and session flow tests
//!
//! Run with: cargo test -p integration-tests --test membership_tests

use std::time::Duration;

use futures::future::join_all;
use integration_tests::*;
use reddit_core::{CommunityName, DomainEvent, UserId};
use reddit_service::{
    AuthService, CommunityService, MembershipService, ServiceContext, ServiceError,
};

async fn seed_community(ctx: &ServiceContext) -> (CommunityName, UserId) {
    let name = unique_community_name();
    let creator = unique_user_id();
    CommunityService::new(ctx)
        .create_community(&creator, create_request(&name))
        .await
        .unwrap();
    (community_name(&name), creator)
}

async fn member_count(ctx: &ServiceContext, name: &CommunityName) -> u32 {
    ctx.community_repo()
        .find_by_name(name)
        .await
        .unwrap()
        .expect("community exists")
        .number_of_members
}

// ============================================================================
// Join / Leave
// ============================================================================

#[tokio::test]
async fn test_join_twice_counts_once() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let ctx = backend.client().unwrap();
    let user = sign_up_new_user(&ctx).await.unwrap();
    let service = MembershipService::new(&ctx);

    service.join_community(&user, &name).await.unwrap();
    service.join_community(&user, &name).await.unwrap();

    assert_eq!(member_count(&ctx, &name).await, 2);
    assert_eq!(ctx.snippet_repo().find_by_user(&user).await.unwrap().len(), 1);
    assert_eq!(ctx.state().snapshot().my_snippets.len(), 1);
}

#[tokio::test]
async fn test_join_then_leave_restores_count() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let ctx = backend.client().unwrap();
    let user = sign_up_new_user(&ctx).await.unwrap();
    let service = MembershipService::new(&ctx);
    let before = member_count(&ctx, &name).await;

    service.join_community(&user, &name).await.unwrap();
    service.leave_community(&user, &name).await.unwrap();

    assert_eq!(member_count(&ctx, &name).await, before);
    assert!(ctx.snippet_repo().find(&user, &name).await.unwrap().is_none());
    assert!(!ctx.state().is_member(&name));
}

#[tokio::test]
async fn test_creator_can_leave_to_zero() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    let (name, creator) = seed_community(&ctx).await;
    let service = MembershipService::new(&ctx);

    service.leave_community(&creator, &name).await.unwrap();
    let again = service.leave_community(&creator, &name).await.unwrap();

    assert!(!again.changed);
    assert_eq!(member_count(&ctx, &name).await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_all_counted() {
    let backend =
        TestBackend::with_read_latency(Duration::from_millis(2)).with_max_attempts(10);
    let (name, _) = seed_community(&backend.client().unwrap()).await;

    let joins = (0..4).map(|_| {
        let ctx = backend.client().unwrap();
        let name = name.clone();
        tokio::spawn(async move {
            MembershipService::new(&ctx)
                .join_community(&unique_user_id(), &name)
                .await
        })
    });

    for result in join_all(joins).await {
        assert!(result.unwrap().unwrap().changed);
    }
    assert_eq!(member_count(&backend.client().unwrap(), &name).await, 5);
}

// ============================================================================
// Optimistic local state
// ============================================================================

#[tokio::test]
async fn test_failed_join_rolls_back_local_state() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let ctx = backend.client().unwrap();
    let user = sign_up_new_user(&ctx).await.unwrap();
    MembershipService::new(&ctx).get_my_snippets(&user).await.unwrap();

    backend.reject_commits(true);
    let err = MembershipService::new(&ctx)
        .join_community(&user, &name)
        .await
        .unwrap_err();

    assert!(err.is_backend_unavailable());
    assert_eq!(err.display_message(), "The service is currently unavailable.");
    let state = ctx.state().snapshot();
    assert!(!state.is_member(&name));
    assert!(!state.loading);
    assert_eq!(member_count(&ctx, &name).await, 1);
}

#[tokio::test]
async fn test_failed_leave_rolls_back_local_state() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    let creator = sign_up_new_user(&ctx).await.unwrap();
    let name = community_name(&unique_community_name());
    CommunityService::new(&ctx)
        .create_community(&creator, create_request(name.as_str()))
        .await
        .unwrap();
    assert!(ctx.state().snapshot().is_moderator(&name));

    backend.reject_commits(true);
    MembershipService::new(&ctx)
        .leave_community(&creator, &name)
        .await
        .unwrap_err();

    assert!(ctx.state().snapshot().is_moderator(&name));
    assert_eq!(member_count(&ctx, &name).await, 1);
}

#[tokio::test]
async fn test_subscriber_sees_join() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let ctx = backend.client().unwrap();
    let user = sign_up_new_user(&ctx).await.unwrap();
    let mut updates = ctx.state().subscribe();

    MembershipService::new(&ctx)
        .join_community(&user, &name)
        .await
        .unwrap();

    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().is_member(&name));
}

#[tokio::test]
async fn test_member_events_are_published() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let mut events = backend.publisher.subscribe();
    let ctx = backend.client().unwrap();
    let user = unique_user_id();
    let service = MembershipService::new(&ctx);

    service.join_community(&user, &name).await.unwrap();
    service.join_community(&user, &name).await.unwrap();
    service.leave_community(&user, &name).await.unwrap();

    let first = events.recv().await.unwrap();
    assert!(matches!(first, DomainEvent::MemberJoined(ref e) if e.number_of_members == 2));
    let second = events.recv().await.unwrap();
    assert!(matches!(second, DomainEvent::MemberLeft(ref e) if e.number_of_members == 1));
}

#[tokio::test]
async fn test_other_user_join_keeps_signed_in_header() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let ctx = backend.client().unwrap();
    let alice = sign_up_new_user(&ctx).await.unwrap();
    let bob = unique_user_id();
    let membership = MembershipService::new(&ctx);
    CommunityService::new(&ctx)
        .get_community(name.as_str())
        .await
        .unwrap();

    let joined = membership.join_community(&bob, &name).await.unwrap();
    assert!(joined.is_member);
    assert_eq!(joined.memberships.len(), 1);

    assert!(ctx.snippet_repo().find_by_user(&alice).await.unwrap().is_empty());
    let header = membership.header_view().unwrap();
    assert_eq!(header.button_label, "Join");
    assert!(!header.is_joined);
    assert_eq!(ctx.state().snapshot().current_community.unwrap().number_of_members, 2);
}

// ============================================================================
// Session flow
// ============================================================================

#[tokio::test]
async fn test_signed_in_user_toggles_membership() {
    let backend = TestBackend::new();
    let (name, _) = seed_community(&backend.client().unwrap()).await;
    let ctx = backend.client().unwrap();
    let account = TestAccount::unique();
    let auth = AuthService::new(&ctx);
    let membership = MembershipService::new(&ctx);

    let page = CommunityService::new(&ctx)
        .get_community(name.as_str())
        .await
        .unwrap()
        .unwrap();

    let err = membership.on_join_or_leave(&page, false).await.unwrap_err();
    assert!(matches!(err, ServiceError::AuthRequired));

    auth.sign_up(account.sign_up_request()).await.unwrap();

    let joined = membership.on_join_or_leave(&page, false).await.unwrap();
    assert!(joined.is_member);
    let header = membership.header_view().unwrap();
    assert_eq!(header.button_label, "Joined");
    assert!(header.outlined);

    let left = membership.on_join_or_leave(&page, true).await.unwrap();
    assert!(!left.is_member);
    assert_eq!(membership.header_view().unwrap().button_label, "Join");
}

#[tokio::test]
async fn test_sign_in_loads_snippets_and_sign_out_clears() {
    let backend = TestBackend::new();
    let account = TestAccount::unique();

    let first_tab = backend.client().unwrap();
    let session = AuthService::new(&first_tab)
        .sign_up(account.sign_up_request())
        .await
        .unwrap();
    let uid = UserId::parse(session.uid.as_str()).unwrap();
    let created = unique_community_name();
    CommunityService::new(&first_tab)
        .create_community(&uid, create_request(&created))
        .await
        .unwrap();

    let second_tab = backend.client().unwrap();
    let auth = AuthService::new(&second_tab);
    auth.sign_in(account.sign_in_request()).await.unwrap();

    let state = second_tab.state().snapshot();
    assert!(state.snippets_fetched);
    assert!(state.is_moderator(&community_name(&created)));

    auth.sign_out().await.unwrap();
    assert!(second_tab.state().snapshot().my_snippets.is_empty());
    assert!(auth.current_session().is_none());
}

#[tokio::test]
async fn test_sign_up_offline_identity() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    backend.identity.set_offline(true);

    let err = AuthService::new(&ctx)
        .sign_up(TestAccount::unique().sign_up_request())
        .await
        .unwrap_err();

    assert!(err.is_backend_unavailable());
    assert_eq!(err.display_message(), "A network error has occurred");
    assert!(backend.store.is_empty());
}
