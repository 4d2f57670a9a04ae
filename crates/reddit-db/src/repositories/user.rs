//! Document store implementation of UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use reddit_core::traits::encode;
use reddit_core::{DocumentPath, DocumentStore, RepoResult, UserId, UserRecord, UserRepository};
use tracing::instrument;

use super::error::map_store_error;
use crate::mappers::{user_from_document, user_to_doc};

#[derive(Clone)]
pub struct StoreUserRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoreUserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    #[instrument(skip(self, user), fields(uid = %user.uid))]
    async fn create(&self, user: &UserRecord) -> RepoResult<()> {
        let data = encode(&user_to_doc(user)).map_err(map_store_error)?;
        self.store
            .set_document(&DocumentPath::user(&user.uid), data)
            .await
            .map_err(map_store_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, uid: &UserId) -> RepoResult<Option<UserRecord>> {
        let doc = self
            .store
            .get(&DocumentPath::user(uid))
            .await
            .map_err(map_store_error)?;

        doc.as_ref().map(user_from_document).transpose()
    }
}
