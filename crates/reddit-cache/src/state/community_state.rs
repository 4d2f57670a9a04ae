//! Community state store.
//!
//! Holds the signed-in user's membership snippets and the community being
//! viewed. All mutation goes through [`CommunityStateStore`], which publishes
//! every change on a `tokio::sync::watch` channel; views subscribe instead of
//! reading shared globals.

use std::sync::Arc;

use reddit_core::{Community, CommunityName, CommunitySnippet};
use tokio::sync::watch;
use tracing::debug;

/// Snapshot of the local community state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityState {
    /// Communities the signed-in user belongs to
    pub my_snippets: Vec<CommunitySnippet>,
    /// Community currently on screen
    pub current_community: Option<Community>,
    /// Whether `my_snippets` has been loaded from the store
    pub snippets_fetched: bool,
    /// A create/join/leave request is in flight
    pub loading: bool,
}

impl CommunityState {
    pub fn is_member(&self, name: &CommunityName) -> bool {
        self.snippet(name).is_some()
    }

    pub fn snippet(&self, name: &CommunityName) -> Option<&CommunitySnippet> {
        self.my_snippets.iter().find(|s| s.community_id == *name)
    }

    pub fn is_moderator(&self, name: &CommunityName) -> bool {
        self.snippet(name).is_some_and(|s| s.is_moderator)
    }
}

/// State store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Another request is already in progress")]
    RequestInFlight,
}

/// Owner of the community state and its update channel
#[derive(Debug, Clone)]
pub struct CommunityStateStore {
    tx: Arc<watch::Sender<CommunityState>>,
}

impl CommunityStateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CommunityState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Receive every future state change
    pub fn subscribe(&self) -> watch::Receiver<CommunityState> {
        self.tx.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CommunityState {
        self.tx.borrow().clone()
    }

    pub fn is_member(&self, name: &CommunityName) -> bool {
        self.tx.borrow().is_member(name)
    }

    /// Mark a request as in flight; the guard clears `loading` when dropped
    pub fn begin_request(&self) -> Result<RequestGuard, StateError> {
        let mut acquired = false;
        self.tx.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            acquired = true;
            true
        });

        if acquired {
            Ok(RequestGuard {
                tx: Arc::clone(&self.tx),
            })
        } else {
            Err(StateError::RequestInFlight)
        }
    }

    /// Replace the snippet list with what the store returned
    pub fn set_snippets(&self, snippets: Vec<CommunitySnippet>) {
        self.tx.send_modify(|state| {
            state.my_snippets = snippets;
            state.snippets_fetched = true;
        });
    }

    /// Insert or replace the snippet for its community
    pub fn upsert_snippet(&self, snippet: CommunitySnippet) {
        self.tx.send_modify(|state| {
            match state
                .my_snippets
                .iter_mut()
                .find(|s| s.community_id == snippet.community_id)
            {
                Some(existing) => *existing = snippet,
                None => state.my_snippets.push(snippet),
            }
        });
    }

    /// Remove the snippet for a community; returns the removed snippet
    pub fn remove_snippet(&self, name: &CommunityName) -> Option<CommunitySnippet> {
        let mut removed = None;
        self.tx.send_if_modified(|state| {
            let pos = state.my_snippets.iter().position(|s| s.community_id == *name);
            match pos {
                Some(pos) => {
                    removed = Some(state.my_snippets.remove(pos));
                    true
                }
                None => false,
            }
        });
        removed
    }

    /// Undo an optimistic change to one community after a failed write
    ///
    /// `previous` is the snippet held before the change, `None` if the user
    /// was not a member. Snippets for other communities are left alone.
    pub fn restore_snippet(&self, name: &CommunityName, previous: Option<CommunitySnippet>) {
        debug!(
            community_id = %name,
            member = previous.is_some(),
            "Rolling back optimistic snippet update"
        );
        match previous {
            Some(snippet) => self.upsert_snippet(snippet),
            None => {
                self.remove_snippet(name);
            }
        }
    }

    pub fn set_current_community(&self, community: Option<Community>) {
        self.tx.send_modify(|state| state.current_community = community);
    }

    /// Refresh the current community if it is the one given
    pub fn sync_current_community(&self, community: &Community) {
        self.tx.send_if_modified(|state| match &mut state.current_community {
            Some(current) if current.id == community.id && current != community => {
                *current = community.clone();
                true
            }
            _ => false,
        });
    }

    /// Forget everything (sign-out)
    pub fn reset(&self) {
        self.tx.send_modify(|state| {
            let loading = state.loading;
            *state = CommunityState {
                loading,
                ..CommunityState::default()
            };
        });
    }
}

impl Default for CommunityStateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the `loading` flag when dropped
#[derive(Debug)]
pub struct RequestGuard {
    tx: Arc<watch::Sender<CommunityState>>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.tx.send_modify(|state| state.loading = false);
    }
}
