use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// Store-assigned entity identifier.
pub type EntityId = u64;

/// A stored record: the id assigned by the store plus the caller's payload.
///
/// Serializes with the payload fields flattened next to `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity<P> {
    pub id: EntityId,
    #[serde(flatten)]
    pub payload: P,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity {0} not found")]
    NotFound(EntityId),
}

/// Window over the id-ordered entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    pub fn all() -> Self { Self { offset: 0, limit: usize::MAX } }
}

struct StoreState<P> {
    next_id: EntityId,
    entries: BTreeMap<EntityId, P>,
}

/// In-memory keyed entity store.
///
/// The id counter and the entries share one reader/writer lock, so a create is
/// observed either completely or not at all. Ids start at 1 and are never
/// handed out twice by the same instance, deleted or not. Clones share state.
pub struct MemoryStore<P> {
    inner: Arc<RwLock<StoreState<P>>>,
}

impl<P> Clone for MemoryStore<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P> Default for MemoryStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> MemoryStore<P> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState { next_id: 1, entries: BTreeMap::new() })),
        }
    }

    /// Insert a payload under the next id and return that id.
    pub async fn create(&self, payload: P) -> EntityId {
        let mut state = self.inner.write().await;
        let id = state.next_id;
        state.next_id += 1;
        state.entries.insert(id, payload);
        id
    }

    /// Replace the payload of an existing entity. Never inserts.
    pub async fn update(&self, id: EntityId, payload: P) -> Result<Entity<P>, StoreError>
    where
        P: Clone,
    {
        let mut state = self.inner.write().await;
        let slot = state.entries.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = payload;
        Ok(Entity { id, payload: slot.clone() })
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;
        state.entries.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    pub async fn get(&self, id: EntityId) -> Result<Entity<P>, StoreError>
    where
        P: Clone,
    {
        let state = self.inner.read().await;
        state
            .entries
            .get(&id)
            .map(|payload| Entity { id, payload: payload.clone() })
            .ok_or(StoreError::NotFound(id))
    }

    /// Entities in ascending id order.
    pub async fn list(&self, page: Page) -> Vec<Entity<P>>
    where
        P: Clone,
    {
        let state = self.inner.read().await;
        state
            .entries
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .map(|(id, payload)| Entity { id: *id, payload: payload.clone() })
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}
