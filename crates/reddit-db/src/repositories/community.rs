//! Document store implementation of CommunityRepository

use std::sync::Arc;

use async_trait::async_trait;
use reddit_core::{
    CollectionPath, Community, CommunityName, CommunityRepository, DocumentPath, DocumentStore,
    RepoResult,
};
use tracing::instrument;

use super::error::map_store_error;
use crate::mappers::community_from_document;

#[derive(Clone)]
pub struct StoreCommunityRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoreCommunityRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommunityRepository for StoreCommunityRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &CommunityName) -> RepoResult<Option<Community>> {
        let doc = self
            .store
            .get(&DocumentPath::community(name))
            .await
            .map_err(map_store_error)?;

        doc.as_ref().map(community_from_document).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Community>> {
        let docs = self
            .store
            .list(&CollectionPath::communities())
            .await
            .map_err(map_store_error)?;

        docs.iter().map(community_from_document).collect()
    }
}
