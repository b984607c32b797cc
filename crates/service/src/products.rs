use serde::{Deserialize, Serialize};

use crate::crud::{CrudService, Payload};
use crate::errors::ServiceError;

/// Catalog product; prices are kept in cents.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
}

impl Payload for Product {
    const KIND: &'static str = "product";

    fn validate(&self) -> Result<(), ServiceError> {
        if self.slug.trim().is_empty() {
            return Err(ServiceError::validation("slug is required"));
        }
        if self.price_cents <= 0 {
            return Err(ServiceError::validation("price_cents must be positive"));
        }
        Ok(())
    }
}

pub type ProductService = CrudService<Product>;
