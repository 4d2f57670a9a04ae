//! Document store implementation of SnippetRepository

use std::sync::Arc;

use async_trait::async_trait;
use reddit_core::{
    CollectionPath, CommunityName, CommunitySnippet, DocumentPath, DocumentStore, RepoResult,
    SnippetRepository, UserId,
};
use tracing::instrument;

use super::error::map_store_error;
use crate::mappers::snippet_from_document;

#[derive(Clone)]
pub struct StoreSnippetRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoreSnippetRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SnippetRepository for StoreSnippetRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        user_id: &UserId,
        name: &CommunityName,
    ) -> RepoResult<Option<CommunitySnippet>> {
        let doc = self
            .store
            .get(&DocumentPath::community_snippet(user_id, name))
            .await
            .map_err(map_store_error)?;

        doc.as_ref().map(snippet_from_document).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &UserId) -> RepoResult<Vec<CommunitySnippet>> {
        let docs = self
            .store
            .list(&CollectionPath::community_snippets(user_id))
            .await
            .map_err(map_store_error)?;

        docs.iter().map(snippet_from_document).collect()
    }
}
