//! Community creation tests
//!
//! Run with: cargo test -p integration-tests --test community_tests

use std::time::Duration;

use futures::future::join_all;
use integration_tests::*;
use reddit_core::{DomainEvent, PrivacyType};
use reddit_service::{CommunityService, CreateCommunityRequest, ServiceError};

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
async fn test_create_community_makes_creator_moderator() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    let creator = unique_user_id();

    let created = CommunityService::new(&ctx)
        .create_community(&creator, CreateCommunityRequest::new("test", PrivacyType::Public))
        .await
        .unwrap();
    assert_eq!(created.number_of_members, 1);
    assert_eq!(created.privacy_type, PrivacyType::Public);

    let snippet = ctx
        .snippet_repo()
        .find(&creator, &community_name("test"))
        .await
        .unwrap()
        .expect("creator snippet");
    assert!(snippet.is_moderator);

    let stored = ctx
        .community_repo()
        .find_by_name(&community_name("test"))
        .await
        .unwrap()
        .expect("community document");
    assert_eq!(stored.number_of_members, 1);
    assert_eq!(stored.creator_id, creator);
}

#[tokio::test]
async fn test_invalid_names_write_nothing() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    let service = CommunityService::new(&ctx);

    for name in ["ab", "!!!!", "", "this_name_is_far_too_long"] {
        let err = service
            .create_community(&unique_user_id(), create_request(name))
            .await
            .unwrap_err();
        assert!(err.is_user_correctable(), "{name}");
        assert_eq!(
            err.display_message(),
            "Community names must be between 3-21 characters, and can only contain letters, numbers and underscores"
        );
    }

    assert!(backend.store.is_empty());
}

#[tokio::test]
async fn test_second_creator_gets_name_taken() {
    let backend = TestBackend::new();
    let name = unique_community_name();
    let first = backend.client().unwrap();
    let second = backend.client().unwrap();

    CommunityService::new(&first)
        .create_community(&unique_user_id(), create_request(&name))
        .await
        .unwrap();

    let loser = unique_user_id();
    let err = CommunityService::new(&second)
        .create_community(&loser, create_request(&name))
        .await
        .unwrap_err();

    assert!(err.is_name_taken());
    assert_eq!(err.display_message(), format!("Sorry, r/{name} is taken."));
    assert!(second.snippet_repo().find_by_user(&loser).await.unwrap().is_empty());
    assert!(second.state().snapshot().my_snippets.is_empty());
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_single_winner() {
    let backend = TestBackend::with_read_latency(Duration::from_millis(5));
    let name = unique_community_name();

    let attempts = (0..8).map(|_| {
        let ctx = backend.client().unwrap();
        let name = name.clone();
        tokio::spawn(async move {
            let creator = unique_user_id();
            CommunityService::new(&ctx)
                .create_community(&creator, create_request(&name))
                .await
                .map(|_| creator)
        })
    });

    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(winners.len(), 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(err.is_name_taken(), "unexpected error: {err}");
    }

    let ctx = backend.client().unwrap();
    let community = ctx
        .community_repo()
        .find_by_name(&community_name(&name))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&community.creator_id, winners[0]);
    assert_eq!(community.number_of_members, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_two_simultaneous_creates() {
    let backend = TestBackend::with_read_latency(Duration::from_millis(10));
    let name = unique_community_name();
    let (a, b) = (backend.client().unwrap(), backend.client().unwrap());

    let (svc_a, svc_b) = (CommunityService::new(&a), CommunityService::new(&b));
    let (uid_a, uid_b) = (unique_user_id(), unique_user_id());
    let (ra, rb) = tokio::join!(
        svc_a.create_community(&uid_a, create_request(&name)),
        svc_b.create_community(&uid_b, create_request(&name)),
    );

    assert!(ra.is_ok() != rb.is_ok());
    let err = ra.err().or(rb.err()).unwrap();
    assert!(err.is_name_taken());
}

#[tokio::test]
async fn test_same_client_cannot_double_submit() {
    let backend = TestBackend::with_read_latency(Duration::from_millis(20));
    let ctx = backend.client().unwrap();
    let service = CommunityService::new(&ctx);
    let creator = unique_user_id();

    let (first, second) = tokio::join!(
        service.create_community(&creator, create_request(&unique_community_name())),
        async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            service
                .create_community(&creator, create_request(&unique_community_name()))
                .await
        }
    );

    assert!(first.is_ok());
    assert!(matches!(second, Err(ServiceError::RequestInFlight)));
    assert!(!ctx.state().snapshot().loading);
}

// ============================================================================
// Failures and events
// ============================================================================

#[tokio::test]
async fn test_offline_store_reports_backend_message() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    backend.store.set_offline(true);

    let err = CommunityService::new(&ctx)
        .create_community(&unique_user_id(), create_request(&unique_community_name()))
        .await
        .unwrap_err();

    assert!(err.is_backend_unavailable());
    assert_eq!(
        err.display_message(),
        "Failed to get document because the client is offline."
    );
    let state = ctx.state().snapshot();
    assert!(!state.loading);
    assert!(state.my_snippets.is_empty());
}

#[tokio::test]
async fn test_created_event_is_published() {
    let backend = TestBackend::new();
    let mut events = backend.publisher.subscribe();
    let ctx = backend.client().unwrap();
    let name = unique_community_name();

    CommunityService::new(&ctx)
        .create_community(&unique_user_id(), CreateCommunityRequest::new(&name, PrivacyType::Restricted))
        .await
        .unwrap();

    match events.recv().await.unwrap() {
        DomainEvent::CommunityCreated(event) => {
            assert_eq!(event.community_id.as_str(), name);
            assert_eq!(event.privacy_type, PrivacyType::Restricted);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_community_page_load() {
    let backend = TestBackend::new();
    let ctx = backend.client().unwrap();
    let name = unique_community_name();
    CommunityService::new(&ctx)
        .create_community(&unique_user_id(), create_request(&name))
        .await
        .unwrap();

    let viewer = backend.client().unwrap();
    let service = CommunityService::new(&viewer);
    let page = service.get_community(&name).await.unwrap().expect("page");
    assert_eq!(page.id, name);
    assert_eq!(
        viewer.state().snapshot().current_community.map(|c| c.id),
        Some(community_name(&name))
    );

    assert!(service.get_community("not_a_community").await.unwrap().is_none());
}
