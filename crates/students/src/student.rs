use serde::Serialize;

use classroom_core::validation::{exact_chars, min_chars, required, Violation, ViolationKind};
use classroom_core::{Entity, ValueObject};
use classroom_courses::{Course, CourseId, CourseSummary};

const STUDENT_ID_LEN: usize = 9;
const NAME_MIN_LEN: usize = 3;

/// Nine-character student identifier (not necessarily numeric).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, Violation> {
        let raw = raw.into();
        exact_chars(
            "studentId",
            &raw,
            STUDENT_ID_LEN,
            "Student Id must contain 9 characters",
        )?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for StudentId {}

impl core::fmt::Display for StudentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Degree program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Program {
    Cpe,
    Isne,
}

impl ValueObject for Program {}

impl core::str::FromStr for Program {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CPE" => Ok(Program::Cpe),
            "ISNE" => Ok(Program::Isne),
            _ => Err(Violation::new(
                "program",
                ViolationKind::InvalidEnum,
                "Program must be either CPE or ISNE",
            )),
        }
    }
}

/// A student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub program: Program,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> &Self::Id {
        &self.student_id
    }
}

impl Student {
    /// Courses from `catalog` this student is enrolled in.
    ///
    /// Output follows catalog order, not the order of the student's own list.
    /// Ids with no matching course are skipped.
    pub fn enrolled_courses(&self, catalog: &[Course]) -> Vec<CourseSummary> {
        let enrolled = match self.courses.as_deref() {
            Some(ids) if !ids.is_empty() => ids,
            _ => return Vec::new(),
        };

        catalog
            .iter()
            .filter(|c| enrolled.contains(&c.course_id))
            .map(Course::summary)
            .collect()
    }

    /// Shallow merge of an update onto this record.
    pub fn apply_update(&mut self, update: &UpdateStudent) {
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(program) = update.program {
            self.program = program;
        }
    }
}

fn validate_first_name(name: String) -> Result<String, Violation> {
    min_chars(
        "firstName",
        &name,
        NAME_MIN_LEN,
        "First name requires at least 3 characters",
    )?;
    Ok(name)
}

fn validate_last_name(name: String) -> Result<String, Violation> {
    min_chars(
        "lastName",
        &name,
        NAME_MIN_LEN,
        "Last name requires at least 3 characters",
    )?;
    Ok(name)
}

fn validate_program(raw: &str) -> Result<Program, Violation> {
    raw.parse()
}

/// Command: register a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStudent {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub program: Program,
    pub courses: Option<Vec<CourseId>>,
    pub section: Option<String>,
}

impl CreateStudent {
    pub fn validate(
        student_id: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        program: Option<String>,
        courses: Option<Vec<i64>>,
        section: Option<String>,
    ) -> Result<Self, Violation> {
        let student_id = StudentId::parse(required("studentId", student_id)?)?;
        let first_name = validate_first_name(required("firstName", first_name)?)?;
        let last_name = validate_last_name(required("lastName", last_name)?)?;
        let program = validate_program(&required("program", program)?)?;
        let courses = courses
            .map(|ids| ids.into_iter().map(CourseId::parse).collect::<Result<Vec<_>, _>>())
            .transpose()?;
        Ok(Self {
            student_id,
            first_name,
            last_name,
            program,
            courses,
            section,
        })
    }

    pub fn into_student(self) -> Student {
        Student {
            student_id: self.student_id,
            first_name: self.first_name,
            last_name: self.last_name,
            program: self.program,
            courses: self.courses,
            section: self.section,
        }
    }
}

/// Command: update a student. Absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStudent {
    pub student_id: StudentId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub program: Option<Program>,
}

impl UpdateStudent {
    pub fn validate(
        student_id: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        program: Option<String>,
    ) -> Result<Self, Violation> {
        let student_id = StudentId::parse(required("studentId", student_id)?)?;
        Ok(Self {
            student_id,
            first_name: first_name.map(validate_first_name).transpose()?,
            last_name: last_name.map(validate_last_name).transpose()?,
            program: program.as_deref().map(validate_program).transpose()?,
        })
    }
}

/// Command: remove a student by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudent {
    pub student_id: StudentId,
}

impl DeleteStudent {
    pub fn validate(student_id: Option<String>) -> Result<Self, Violation> {
        let student_id = StudentId::parse(required("studentId", student_id)?)?;
        Ok(Self { student_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, title: &str) -> Course {
        Course::new(CourseId::parse(id).unwrap(), title, vec!["Dome".to_string()])
    }

    fn catalog() -> Vec<Course> {
        vec![
            course(261207, "Basic Computer Engineering Lab"),
            course(261497, "Full Stack Development"),
            course(269101, "Introduction to Information Systems and Network Engineering"),
        ]
    }

    fn student(courses: Option<Vec<i64>>) -> Student {
        CreateStudent::validate(
            Some("650610002".into()),
            Some("Cillian".into()),
            Some("Murphy".into()),
            Some("CPE".into()),
            courses,
            None,
        )
        .unwrap()
        .into_student()
    }

    #[test]
    fn student_id_must_be_nine_characters() {
        assert!(StudentId::parse("650610001").is_ok());
        assert!(StudentId::parse("abcdefghi").is_ok());
        let err = StudentId::parse("65061000").unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidLength);
        assert_eq!(err.message, "Student Id must contain 9 characters");
        assert!(StudentId::parse("6506100011").is_err());
    }

    #[test]
    fn names_need_three_characters() {
        let err = CreateStudent::validate(
            Some("650610009".into()),
            Some("Al".into()),
            Some("Pacino".into()),
            Some("CPE".into()),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.field, "firstName");
        assert_eq!(err.kind, ViolationKind::TooShort);

        let err = UpdateStudent::validate(Some("650610009".into()), None, Some("Li".into()), None)
            .unwrap_err();
        assert_eq!(err.field, "lastName");
        assert_eq!(err.message, "Last name requires at least 3 characters");
    }

    #[test]
    fn program_must_be_known() {
        assert_eq!("ISNE".parse::<Program>().unwrap(), Program::Isne);
        let err = "EE".parse::<Program>().unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidEnum);
        assert_eq!(err.message, "Program must be either CPE or ISNE");
        assert!("cpe".parse::<Program>().is_err());
    }

    #[test]
    fn create_rejects_malformed_course_ids() {
        let err = CreateStudent::validate(
            Some("650610009".into()),
            Some("Emily".into()),
            Some("Blunt".into()),
            Some("ISNE".into()),
            Some(vec![261207, 123]),
            None,
        )
        .unwrap_err();
        assert_eq!(err.field, "courseId");
    }

    #[test]
    fn delete_requires_student_id() {
        assert!(DeleteStudent::validate(None).is_err());
        assert!(DeleteStudent::validate(Some("650610001".into())).is_ok());
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut s = student(Some(vec![261207]));
        let cmd = UpdateStudent::validate(Some("650610002".into()), None, None, Some("ISNE".into()))
            .unwrap();
        s.apply_update(&cmd);
        assert_eq!(s.program, Program::Isne);
        assert_eq!(s.first_name, "Cillian");
        assert_eq!(s.courses, Some(vec![CourseId::parse(261207).unwrap()]));
    }

    #[test]
    fn no_courses_means_empty_enrollment() {
        assert!(student(None).enrolled_courses(&catalog()).is_empty());
        assert!(student(Some(vec![])).enrolled_courses(&catalog()).is_empty());
    }

    #[test]
    fn enrollment_follows_catalog_order() {
        let s = student(Some(vec![269101, 261207]));
        let ids: Vec<u32> = s
            .enrolled_courses(&catalog())
            .iter()
            .map(|c| c.course_id.get())
            .collect();
        assert_eq!(ids, vec![261207, 269101]);
    }

    #[test]
    fn enrollment_skips_unknown_course_ids() {
        let s = student(Some(vec![999999, 261497]));
        let enrolled = s.enrolled_courses(&catalog());
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0].course_title, "Full Stack Development");
    }

    #[test]
    fn serialization_omits_absent_optionals() {
        let json = serde_json::to_value(student(None)).unwrap();
        assert_eq!(json["studentId"], "650610002");
        assert_eq!(json["program"], "CPE");
        assert!(json.get("courses").is_none());
        assert!(json.get("section").is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any nine-character string is a valid id.
            #[test]
            fn any_nine_chars_is_a_student_id(raw in "[0-9A-Za-z]{9}") {
                prop_assert!(StudentId::parse(raw).is_ok());
            }

            /// Property: other lengths are rejected.
            #[test]
            fn other_lengths_are_rejected(raw in "[0-9]{0,8}|[0-9]{10,20}") {
                prop_assert!(StudentId::parse(raw).is_err());
            }
        }
    }
}
