//! Infrastructure adapters: record storage and seed data.

pub mod seed;
pub mod store;

pub use store::{InMemoryRepository, Repository, StoreError, StoreResult};
