use serde::Serialize;

use classroom_core::validation::{required, Violation, ViolationKind};
use classroom_core::{Entity, ValueObject};

const COURSE_ID_MIN: i64 = 100_000;
const COURSE_ID_MAX: i64 = 999_999;

/// Six-digit course identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CourseId(u32);

impl CourseId {
    /// Validate a raw integer as a course id (100000..=999999).
    pub fn parse(raw: i64) -> Result<Self, Violation> {
        if !(COURSE_ID_MIN..=COURSE_ID_MAX).contains(&raw) {
            return Err(Violation::new(
                "courseId",
                ViolationKind::InvalidLength,
                "Number must be exactly 6 digits",
            ));
        }
        Ok(Self(raw as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl ValueObject for CourseId {}

impl core::fmt::Display for CourseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_id: CourseId,
    pub course_title: String,
    pub instructors: Vec<String>,
}

impl Entity for Course {
    type Id = CourseId;

    fn id(&self) -> &Self::Id {
        &self.course_id
    }
}

/// `{courseId, courseTitle}` projection used when listing enrollments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub course_id: CourseId,
    pub course_title: String,
}

impl Course {
    pub fn new(course_id: CourseId, course_title: impl Into<String>, instructors: Vec<String>) -> Self {
        Self {
            course_id,
            course_title: course_title.into(),
            instructors,
        }
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            course_id: self.course_id,
            course_title: self.course_title.clone(),
        }
    }

    /// Shallow merge: only the fields present on `update` are replaced.
    pub fn apply_update(&mut self, update: &UpdateCourse) {
        if let Some(title) = &update.course_title {
            self.course_title = title.clone();
        }
        if let Some(instructors) = &update.instructors {
            self.instructors = instructors.clone();
        }
    }
}

fn validate_title(title: String) -> Result<String, Violation> {
    if title.is_empty() {
        return Err(Violation::new(
            "courseTitle",
            ViolationKind::EmptyOrMissing,
            "Course title is required",
        ));
    }
    Ok(title)
}

fn validate_instructors(instructors: Vec<String>) -> Result<Vec<String>, Violation> {
    if instructors.is_empty() {
        return Err(Violation::new(
            "instructors",
            ViolationKind::EmptyOrMissing,
            "Instructors must be a non-empty list",
        ));
    }
    Ok(instructors)
}

/// Command: create a course. Every field is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourse {
    pub course_id: CourseId,
    pub course_title: String,
    pub instructors: Vec<String>,
}

impl CreateCourse {
    /// Validate raw body fields in declaration order; the first failure wins.
    pub fn validate(
        course_id: Option<i64>,
        course_title: Option<String>,
        instructors: Option<Vec<String>>,
    ) -> Result<Self, Violation> {
        let course_id = CourseId::parse(required("courseId", course_id)?)?;
        let course_title = validate_title(required("courseTitle", course_title)?)?;
        let instructors = validate_instructors(required("instructors", instructors)?)?;
        Ok(Self {
            course_id,
            course_title,
            instructors,
        })
    }

    pub fn into_course(self) -> Course {
        Course::new(self.course_id, self.course_title, self.instructors)
    }
}

/// Command: update a course. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCourse {
    pub course_id: CourseId,
    pub course_title: Option<String>,
    pub instructors: Option<Vec<String>>,
}

impl UpdateCourse {
    pub fn validate(
        course_id: Option<i64>,
        course_title: Option<String>,
        instructors: Option<Vec<String>>,
    ) -> Result<Self, Violation> {
        let course_id = CourseId::parse(required("courseId", course_id)?)?;
        let instructors = instructors.map(validate_instructors).transpose()?;
        Ok(Self {
            course_id,
            course_title,
            instructors,
        })
    }
}

/// Command: delete a course by id.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeleteCourse {
    pub course_id: CourseId,
}

impl DeleteCourse {
    pub fn validate(course_id: Option<i64>) -> Result<Self, Violation> {
        let course_id = CourseId::parse(required("courseId", course_id)?)?;
        Ok(Self { course_id })
    }
}
