//! Storage abstractions for the service layer
//!
//! `memory_store` is the keyed entity store; `repository` is the trait seam
//! services depend on so the backend can be swapped.

pub mod memory_store;
pub mod repository;
