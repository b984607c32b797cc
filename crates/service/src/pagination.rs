//! Pagination utilities for service layer
//!
//! `Pagination` is what callers send (`?limit=&offset=`); `PageLimits` carries
//! the configured bounds; `normalize` turns both into a store `Page`.

use serde::Deserialize;

use crate::storage::memory_store::Page;

/// Pagination parameters as received from the caller
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// max items to return; `None` or 0 means the default page size
    pub limit: Option<u32>,
    /// entries to skip, in id order
    pub offset: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PageLimits {
    fn default() -> Self { Self { default_limit: 20, max_limit: 100 } }
}

impl Pagination {
    /// Clamp to the configured bounds
    pub fn normalize(self, limits: PageLimits) -> Page {
        let limit = match self.limit {
            None | Some(0) => limits.default_limit,
            Some(n) => n.min(limits.max_limit),
        };
        Page { offset: self.offset.unwrap_or(0) as usize, limit: limit as usize }
    }
}
