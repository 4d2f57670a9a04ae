//! Membership service
//!
//! Joins and leaves communities and keeps the local "communities I belong
//! to" list in step with the store. For the signed-in user the local list
//! changes before the remote write and is rolled back if that write fails;
//! writes made on behalf of anyone else never touch it.

use reddit_core::{
    Community, CommunityName, CommunitySnippet, DocumentData, DocumentPath, DomainError,
    DomainEvent, Transaction, UserId,
};
use reddit_db::mappers::{community_from_document, snippet_from_document, snippet_to_doc};
use tracing::{info, instrument, warn};

use crate::dto::{CommunityHeaderView, CommunityResponse, MembershipResponse, SnippetResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::transaction::{run_transaction, TxOutcome};

/// Store-side result of one join or leave
#[derive(Debug)]
struct MembershipChange {
    /// `None` when leaving a community that has since been deleted
    community: Option<Community>,
    /// The user's snippet after the write
    snippet: Option<CommunitySnippet>,
    changed: bool,
}

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the user's snippets
    ///
    /// Replaces the local list when `user_id` is the signed-in user.
    #[instrument(skip(self))]
    pub async fn get_my_snippets(&self, user_id: &UserId) -> ServiceResult<Vec<SnippetResponse>> {
        let snippets = self.ctx.snippet_repo().find_by_user(user_id).await?;
        let response = snippets.iter().map(SnippetResponse::from).collect();
        if self.ctx.is_signed_in_as(user_id) {
            self.ctx.state().set_snippets(snippets);
        }
        Ok(response)
    }

    /// Join button handler: leave when joined, join otherwise
    ///
    /// # Errors
    /// `AuthRequired` without a signed-in user; the caller opens the auth modal.
    #[instrument(skip(self, community), fields(community_id = %community.id))]
    pub async fn on_join_or_leave(
        &self,
        community: &CommunityResponse,
        is_joined: bool,
    ) -> ServiceResult<MembershipResponse> {
        let session = self
            .ctx
            .identity()
            .current_session()
            .ok_or(ServiceError::AuthRequired)?;
        let name = CommunityName::parse(community.id.as_str())?;

        if is_joined {
            self.leave_community(&session.uid, &name).await
        } else {
            self.join_community(&session.uid, &name).await
        }
    }

    /// Add a membership snippet and bump the member count
    ///
    /// Joining twice is a no-op.
    #[instrument(skip(self))]
    pub async fn join_community(
        &self,
        user_id: &UserId,
        name: &CommunityName,
    ) -> ServiceResult<MembershipResponse> {
        let state = self.ctx.state();
        let _guard = state.begin_request()?;

        let local = self.ctx.is_signed_in_as(user_id);
        let previous = state.snapshot().snippet(name).cloned();
        if local && previous.is_none() {
            state.upsert_snippet(self.optimistic_snippet(name));
        }

        let result = run_transaction(
            self.ctx.store(),
            self.ctx.max_transaction_attempts(),
            move |tx| self.join_attempt(tx, user_id, name),
        )
        .await;

        let change = match result {
            Ok(change) => change,
            Err(e) => {
                warn!(error = %e, local, "Join failed");
                if local {
                    state.restore_snippet(name, previous);
                }
                return Err(e);
            }
        };

        self.reconcile(name, &change, local);

        if change.changed {
            let count = change.community.as_ref().map_or(0, |c| c.number_of_members);
            info!(community_id = %name, user_id = %user_id, count, "Joined community");
            self.ctx
                .publish(DomainEvent::member_joined(name.clone(), user_id.clone(), count));
        }

        self.response(user_id, name, &change, local).await
    }

    /// Remove the membership snippet and drop the member count
    ///
    /// Leaving a community the user is not in is a no-op.
    #[instrument(skip(self))]
    pub async fn leave_community(
        &self,
        user_id: &UserId,
        name: &CommunityName,
    ) -> ServiceResult<MembershipResponse> {
        let state = self.ctx.state();
        let _guard = state.begin_request()?;

        let local = self.ctx.is_signed_in_as(user_id);
        let previous = if local { state.remove_snippet(name) } else { None };

        let result = run_transaction(
            self.ctx.store(),
            self.ctx.max_transaction_attempts(),
            move |tx| self.leave_attempt(tx, user_id, name),
        )
        .await;

        let change = match result {
            Ok(change) => change,
            Err(e) => {
                warn!(error = %e, local, "Leave failed");
                if local {
                    state.restore_snippet(name, previous);
                }
                return Err(e);
            }
        };

        self.reconcile(name, &change, local);

        if change.changed {
            let count = change.community.as_ref().map_or(0, |c| c.number_of_members);
            info!(community_id = %name, user_id = %user_id, count, "Left community");
            self.ctx
                .publish(DomainEvent::member_left(name.clone(), user_id.clone(), count));
        }

        self.response(user_id, name, &change, local).await
    }

    /// Header for the current community page
    pub fn header_view(&self) -> Option<CommunityHeaderView> {
        let state = self.ctx.state().snapshot();
        let community = state.current_community.as_ref()?;
        Some(CommunityHeaderView::new(
            &CommunityResponse::from(community),
            state.is_member(&community.id),
            state.loading,
        ))
    }

    async fn join_attempt(
        &self,
        mut tx: Transaction,
        user_id: &UserId,
        name: &CommunityName,
    ) -> ServiceResult<TxOutcome<MembershipChange>> {
        let store = self.ctx.store();
        let snippet_path = DocumentPath::community_snippet(user_id, name);
        let community_path = DocumentPath::community(name);

        let existing = tx.get(store, &snippet_path).await?;
        let community_doc = tx
            .get(store, &community_path)
            .await?
            .ok_or_else(|| DomainError::CommunityNotFound(name.to_string()))?;
        let mut community = community_from_document(&community_doc)?;

        if let Some(doc) = existing {
            return Ok(TxOutcome::ReadOnly(MembershipChange {
                community: Some(community),
                snippet: Some(snippet_from_document(&doc)?),
                changed: false,
            }));
        }

        let snippet = CommunitySnippet::member_of(&community);
        community.add_member();

        tx.set(&snippet_path, &snippet_to_doc(&snippet))?;
        tx.update(&community_path, member_count_fields(&community));

        Ok(TxOutcome::Commit(
            tx,
            MembershipChange {
                community: Some(community),
                snippet: Some(snippet),
                changed: true,
            },
        ))
    }

    async fn leave_attempt(
        &self,
        mut tx: Transaction,
        user_id: &UserId,
        name: &CommunityName,
    ) -> ServiceResult<TxOutcome<MembershipChange>> {
        let store = self.ctx.store();
        let snippet_path = DocumentPath::community_snippet(user_id, name);
        let community_path = DocumentPath::community(name);

        let existing = tx.get(store, &snippet_path).await?;
        let mut community = tx
            .get(store, &community_path)
            .await?
            .map(|doc| community_from_document(&doc))
            .transpose()?;

        if existing.is_none() {
            return Ok(TxOutcome::ReadOnly(MembershipChange {
                community,
                snippet: None,
                changed: false,
            }));
        }

        tx.delete(&snippet_path);
        if let Some(community) = community.as_mut() {
            community.remove_member();
            tx.update(&community_path, member_count_fields(community));
        }

        Ok(TxOutcome::Commit(
            tx,
            MembershipChange {
                community,
                snippet: None,
                changed: true,
            },
        ))
    }

    /// Make the local state match what was committed
    ///
    /// The member count is shared, so the current community is refreshed for
    /// any user; the snippet list only for the signed-in one.
    fn reconcile(&self, name: &CommunityName, change: &MembershipChange, local: bool) {
        let state = self.ctx.state();
        if local {
            match &change.snippet {
                Some(snippet) => state.upsert_snippet(snippet.clone()),
                None => {
                    state.remove_snippet(name);
                }
            }
        }
        if let Some(community) = &change.community {
            state.sync_current_community(community);
        }
    }

    /// Snippet shown while the join is in flight
    fn optimistic_snippet(&self, name: &CommunityName) -> CommunitySnippet {
        match self.ctx.state().snapshot().current_community {
            Some(community) if community.id == *name => CommunitySnippet::member_of(&community),
            _ => CommunitySnippet {
                community_id: name.clone(),
                is_moderator: false,
                image_url: None,
            },
        }
    }

    /// Outcome plus the user's membership set after the write
    async fn response(
        &self,
        user_id: &UserId,
        name: &CommunityName,
        change: &MembershipChange,
        local: bool,
    ) -> ServiceResult<MembershipResponse> {
        let state = self.ctx.state().snapshot();
        let memberships = if local && state.snippets_fetched {
            state.my_snippets.iter().map(SnippetResponse::from).collect()
        } else {
            let snippets = self.ctx.snippet_repo().find_by_user(user_id).await?;
            snippets.iter().map(SnippetResponse::from).collect()
        };

        Ok(MembershipResponse {
            community_id: name.to_string(),
            is_member: change.snippet.is_some(),
            number_of_members: change.community.as_ref().map(|c| c.number_of_members),
            changed: change.changed,
            memberships,
        })
    }
}

fn member_count_fields(community: &Community) -> DocumentData {
    let mut fields = DocumentData::new();
    fields.insert(
        "numberOfMembers".to_string(),
        community.number_of_members.into(),
    );
    fields
}
