//! Community service
//!
//! Creates communities and loads them for page rendering.

use reddit_core::{
    Community, CommunityName, CommunitySnippet, DocumentPath, DomainError, DomainEvent,
    Transaction, UserId,
};
use reddit_db::mappers::{community_to_doc, snippet_to_doc};
use tracing::{info, instrument};

use crate::dto::{CommunityResponse, CreateCommunityRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::transaction::{run_transaction, TxOutcome};

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a community with its creator as the only member and moderator
    ///
    /// The name check and both writes commit together: of several clients
    /// racing on one name, exactly one succeeds and the rest get `NameTaken`.
    #[instrument(skip(self, request), fields(creator_id = %creator_id, name = %request.name))]
    pub async fn create_community(
        &self,
        creator_id: &UserId,
        request: CreateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        let name = CommunityName::parse(request.name).inspect_err(|e| {
            info!(error = %e, "Community name rejected");
        })?;

        let _guard = self.ctx.state().begin_request()?;

        let community = Community::new(name.clone(), creator_id.clone(), request.privacy_type);
        let snippet = CommunitySnippet::moderator(name.clone());

        let (community_ref, snippet_ref) = (&community, &snippet);
        run_transaction(
            self.ctx.store(),
            self.ctx.max_transaction_attempts(),
            move |tx| self.create_attempt(tx, community_ref, snippet_ref),
        )
        .await?;

        if self.ctx.is_signed_in_as(creator_id) {
            self.ctx.state().upsert_snippet(snippet);
        }

        info!(community_id = %name, "Community created successfully");

        self.ctx.publish(DomainEvent::community_created(
            name,
            creator_id.clone(),
            community.privacy_type,
        ));

        Ok(CommunityResponse::from(&community))
    }

    async fn create_attempt(
        &self,
        mut tx: Transaction,
        community: &Community,
        snippet: &CommunitySnippet,
    ) -> ServiceResult<TxOutcome<()>> {
        let community_path = DocumentPath::community(&community.id);

        if tx.get(self.ctx.store(), &community_path).await?.is_some() {
            return Err(DomainError::NameTaken(community.id.clone()).into());
        }

        tx.set(&community_path, &community_to_doc(community))?;
        tx.set(
            &DocumentPath::community_snippet(&community.creator_id, &community.id),
            &snippet_to_doc(snippet),
        )?;

        Ok(TxOutcome::Commit(tx, ()))
    }

    /// Load a community page and make it the current community
    ///
    /// Names that cannot exist (bad format) are reported as not found.
    #[instrument(skip(self))]
    pub async fn get_community(&self, name: &str) -> ServiceResult<Option<CommunityResponse>> {
        let community = match CommunityName::parse(name) {
            Ok(name) => self.ctx.community_repo().find_by_name(&name).await?,
            Err(_) => None,
        };

        let response = community.as_ref().map(CommunityResponse::from);
        self.ctx.state().set_current_community(community);

        Ok(response)
    }

    /// The community currently on screen
    pub fn current_community(&self) -> Option<CommunityResponse> {
        self.ctx
            .state()
            .snapshot()
            .current_community
            .as_ref()
            .map(CommunityResponse::from)
    }

    /// All communities ordered by name
    #[instrument(skip(self))]
    pub async fn list_communities(&self) -> ServiceResult<Vec<CommunityResponse>> {
        let communities = self.ctx.community_repo().list().await?;
        Ok(communities.iter().map(CommunityResponse::from).collect())
    }
}
