use serde::{Deserialize, Serialize};

use crate::crud::{CrudService, Payload};
use crate::errors::ServiceError;

/// Task payload: what to do and by when (unix seconds).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub deadline: i64,
}

impl Payload for Task {
    const KIND: &'static str = "task";

    fn validate(&self) -> Result<(), ServiceError> {
        if self.description.trim().is_empty() {
            return Err(ServiceError::validation("description must not be blank"));
        }
        if self.deadline < 0 {
            return Err(ServiceError::validation("deadline must be >= 0"));
        }
        Ok(())
    }
}

pub type TaskService = CrudService<Task>;
