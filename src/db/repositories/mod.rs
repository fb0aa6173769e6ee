//! Repository pattern implementations
//!
//! Data access objects for the service's tables.

pub mod test_item;

pub use test_item::{InMemoryTestItemRepository, RepositoryError, TestItemRepository};
