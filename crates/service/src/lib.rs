//! Service layer providing CRUD operations over in-memory keyed entity stores.
//! - `storage` owns the entities and assigns ids; it knows nothing about payloads.
//! - `crud` adds payload validation and logging on top of a `Repository`.
//! - `tasks`, `links`, `products` and `users` are the payload domains served over HTTP.

pub mod errors;
pub mod storage;
pub mod pagination;
pub mod crud;
pub mod tasks;
pub mod links;
pub mod products;
pub mod users;
