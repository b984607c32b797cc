use thiserror::Error;

use crate::storage::memory_store::{EntityId, StoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: EntityId) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }

    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    /// Attach the entity kind to a store error.
    pub fn from_store(entity: &str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::not_found(entity, id),
        }
    }
}
