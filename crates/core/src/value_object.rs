//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Validated identifiers (`StudentId`, `CourseId`) and
//! enumerations such as `Program` are value objects: once constructed they are
//! known to be well-formed, so downstream code never re-checks them.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with same values are equal)
/// - **Entity**: has identity (two entities with same id are the same entity)
///
/// Example:
/// - `CourseId(261207)` is a value object
/// - `Course { course_id: CourseId(261207), .. }` is an entity
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct CourseId(u32);
///
/// impl ValueObject for CourseId {}
///
/// assert_eq!(CourseId(261207), CourseId(261207));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
