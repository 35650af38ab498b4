//! `classroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identity, value semantics, field validation and the domain error model.

pub mod entity;
pub mod error;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::DomainError;
pub use validation::{Violation, ViolationKind};
pub use value_object::ValueObject;
