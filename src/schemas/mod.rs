//! Schema module
//!
//! Request and response bodies for the HTTP API.

pub mod test_item;

pub use test_item::{Pagination, TestItemCreate, TestItemResponse};
