//! Entity storage abstractions.

pub mod error;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use repository::{InMemoryRepository, Repository};
