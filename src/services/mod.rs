//! Services module
//!
//! Contains external service integrations.

pub mod storage;

pub use storage::StorageService;
