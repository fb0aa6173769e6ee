//! Error types
//!
//! HTTP-facing errors. Configuration errors live in [`crate::config::ConfigError`]
//! and never reach API clients.

pub mod types;

pub use types::ApiError;
