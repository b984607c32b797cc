use serde::{Deserialize, Serialize};

use crate::crud::{CrudService, Payload};
use crate::errors::ServiceError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl Payload for User {
    const KIND: &'static str = "user";

    /// Surrounding whitespace is never stored.
    fn normalize(self) -> Self {
        Self { name: self.name.trim().to_string(), email: self.email.trim().to_string() }
    }

    fn validate(&self) -> Result<(), ServiceError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ServiceError::validation("name and email are required"));
        }
        Ok(())
    }
}

pub type UserService = CrudService<User>;
