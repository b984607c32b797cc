use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{PageLimits, Pagination};
use crate::storage::memory_store::{Entity, EntityId};
use crate::storage::repository::Repository;

/// Payload types served through a [`CrudService`].
pub trait Payload: Clone + Send + Sync + 'static {
    /// Entity kind used in log fields and error messages, e.g. `task`.
    const KIND: &'static str;

    /// Canonical form stored for this payload; applied before validation.
    fn normalize(self) -> Self { self }

    fn validate(&self) -> Result<(), ServiceError>;
}

/// Application service over a keyed entity repository.
/// Validates payloads before they reach storage and maps store errors.
pub struct CrudService<P: Payload> {
    repo: Arc<dyn Repository<P>>,
    limits: PageLimits,
}

impl<P: Payload> Clone for CrudService<P> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo), limits: self.limits }
    }
}

impl<P: Payload> CrudService<P> {
    pub fn new(repo: Arc<dyn Repository<P>>, limits: PageLimits) -> Self { Self { repo, limits } }

    #[instrument(skip_all, fields(kind = P::KIND))]
    pub async fn create(&self, payload: P) -> Result<Entity<P>, ServiceError> {
        let payload = payload.normalize();
        payload.validate()?;
        let id = self.repo.create(payload.clone()).await;
        info!(kind = P::KIND, id, "entity_created");
        Ok(Entity { id, payload })
    }

    pub async fn get(&self, id: EntityId) -> Result<Entity<P>, ServiceError> {
        self.repo.get(id).await.map_err(|e| ServiceError::from_store(P::KIND, e))
    }

    #[instrument(skip(self, payload), fields(kind = P::KIND))]
    pub async fn update(&self, id: EntityId, payload: P) -> Result<Entity<P>, ServiceError> {
        let payload = payload.normalize();
        payload.validate()?;
        let updated = self
            .repo
            .update(id, payload)
            .await
            .map_err(|e| ServiceError::from_store(P::KIND, e))?;
        info!(kind = P::KIND, id, "entity_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(kind = P::KIND))]
    pub async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.repo.delete(id).await.map_err(|e| ServiceError::from_store(P::KIND, e))?;
        info!(kind = P::KIND, id, "entity_deleted");
        Ok(())
    }

    pub async fn list(&self, pagination: Pagination) -> Vec<Entity<P>> {
        self.repo.list(pagination.normalize(self.limits)).await
    }
}
