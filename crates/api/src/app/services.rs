//! Application services: the store-backed operations behind each route.
//!
//! Handlers validate input into domain commands, then call exactly one method
//! here. Resource-state checks (not found, conflict) happen in this layer,
//! after validation and before any mutation.

use std::sync::Arc;

use classroom_core::DomainError;
use classroom_courses::{Course, CourseId, CourseSummary, CreateCourse, DeleteCourse, UpdateCourse};
use classroom_infra::{seed, InMemoryRepository, Repository, StoreError};
use classroom_students::{Student, StudentId};

use crate::app::errors::{ApiError, ApiResult};

pub struct AppServices {
    students: Arc<dyn Repository<Student>>,
    courses: Arc<dyn Repository<Course>>,
    me: StudentId,
}

impl AppServices {
    pub fn new(
        students: Arc<dyn Repository<Student>>,
        courses: Arc<dyn Repository<Course>>,
        me: StudentId,
    ) -> Self {
        Self {
            students,
            courses,
            me,
        }
    }

    /// In-memory stores loaded with the seed records.
    pub fn seeded(me: StudentId) -> Result<Self, DomainError> {
        let students = InMemoryRepository::with_records(seed::students()?);
        let courses = InMemoryRepository::with_records(seed::courses()?);
        Ok(Self::new(Arc::new(students), Arc::new(courses), me))
    }

    pub fn current_student(&self) -> ApiResult<Student> {
        self.students
            .get(&self.me)?
            .ok_or_else(|| DomainError::not_found("Student").into())
    }

    pub fn enrolled_courses(&self, student_id: &StudentId) -> ApiResult<Vec<CourseSummary>> {
        let student = self
            .students
            .get(student_id)?
            .ok_or_else(|| DomainError::not_found("Student"))?;
        let catalog = self.courses.list()?;
        Ok(student.enrolled_courses(&catalog))
    }

    pub fn course(&self, course_id: CourseId) -> ApiResult<Course> {
        self.courses
            .get(&course_id)?
            .ok_or_else(|| DomainError::not_found("Course").into())
    }

    pub fn create_course(&self, cmd: CreateCourse) -> ApiResult<Course> {
        let course = self
            .courses
            .insert(cmd.into_course())
            .map_err(duplicate_course)?;
        tracing::info!(course_id = %course.course_id, "course created");
        Ok(course)
    }

    pub fn update_course(&self, cmd: UpdateCourse) -> ApiResult<Course> {
        let course = self
            .courses
            .update(&cmd.course_id, &mut |course| course.apply_update(&cmd))
            .map_err(not_found_course)?;
        tracing::info!(course_id = %course.course_id, "course updated");
        Ok(course)
    }

    pub fn delete_course(&self, cmd: DeleteCourse) -> ApiResult<Course> {
        let course = self
            .courses
            .remove(&cmd.course_id)
            .map_err(not_found_course)?;
        tracing::info!(course_id = %course.course_id, "course deleted");
        Ok(course)
    }

    #[cfg(test)]
    fn course_count(&self) -> ApiResult<usize> {
        Ok(self.courses.len()?)
    }
}

fn duplicate_course(err: StoreError) -> ApiError {
    match err {
        StoreError::Duplicate(_) => DomainError::conflict("Course Id already exists").into(),
        other => other.into(),
    }
}

fn not_found_course(err: StoreError) -> ApiError {
    match err {
        StoreError::Missing(_) => DomainError::not_found("Course").into(),
        other => other.into(),
    }
}
