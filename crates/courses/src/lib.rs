//! Courses domain module.
//!
//! Business rules for the course catalog: identifiers, field validation and
//! the create/update/delete commands, implemented as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod course;

pub use course::{Course, CourseId, CourseSummary, CreateCourse, DeleteCourse, UpdateCourse};
