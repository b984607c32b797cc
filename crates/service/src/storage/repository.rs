use async_trait::async_trait;

use crate::storage::memory_store::{Entity, EntityId, MemoryStore, Page, StoreError};

/// Trait abstraction for keyed entity storage.
/// Implementations assign ids on create and never upsert on update.
#[async_trait]
pub trait Repository<P: Send + Sync + 'static>: Send + Sync {
    async fn create(&self, payload: P) -> EntityId;
    async fn get(&self, id: EntityId) -> Result<Entity<P>, StoreError>;
    async fn update(&self, id: EntityId, payload: P) -> Result<Entity<P>, StoreError>;
    async fn delete(&self, id: EntityId) -> Result<(), StoreError>;
    async fn list(&self, page: Page) -> Vec<Entity<P>>;
}

#[async_trait]
impl<P> Repository<P> for MemoryStore<P>
where
    P: Clone + Send + Sync + 'static,
{
    async fn create(&self, payload: P) -> EntityId { self.create(payload).await }
    async fn get(&self, id: EntityId) -> Result<Entity<P>, StoreError> { self.get(id).await }
    async fn update(&self, id: EntityId, payload: P) -> Result<Entity<P>, StoreError> { self.update(id, payload).await }
    async fn delete(&self, id: EntityId) -> Result<(), StoreError> { self.delete(id).await }
    async fn list(&self, page: Page) -> Vec<Entity<P>> { self.list(page).await }
}
