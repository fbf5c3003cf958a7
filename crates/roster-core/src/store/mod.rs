//! Persistence layer for staffing documents.
//!
//! Documents are stored as JSON values in per-kind sled trees, keyed by the
//! raw 16 bytes of their [`Id`](crate::id::Id). A small secondary tree keeps
//! engineer email addresses unique.

mod config;
mod engine;

pub use config::StoreConfig;
pub use engine::StaffingStore;
