//! Shared building blocks for the workspace crates.
//!
//! - `types`: small response types reused across binaries.
//! - `utils::logging`: tracing subscriber initialization.

pub mod types;
pub mod utils;
