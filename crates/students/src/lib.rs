//! Students domain module.
//!
//! Student records, their field validators and the enrollment view that joins
//! a student's course ids against the course catalog.

pub mod student;

pub use student::{CreateStudent, DeleteStudent, Program, Student, StudentId, UpdateStudent};
