use serde::{Deserialize, Serialize};

use crate::crud::{CrudService, Payload};
use crate::errors::ServiceError;

/// Short link: public slug (`external`) pointing at an internal target.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub external: String,
    pub internal: String,
}

impl Payload for Link {
    const KIND: &'static str = "link";

    fn validate(&self) -> Result<(), ServiceError> {
        if self.external.trim().is_empty() || self.internal.trim().is_empty() {
            return Err(ServiceError::validation("external and internal must not be blank"));
        }
        if self.external.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(ServiceError::validation("external must not contain whitespace or '/'"));
        }
        Ok(())
    }
}

pub type LinkService = CrudService<Link>;
