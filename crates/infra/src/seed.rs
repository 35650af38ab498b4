//! Fixed records loaded at process start.
//!
//! Records go through the same validating constructors as request bodies, so
//! a bad seed fails startup instead of serving malformed data.

use classroom_core::Violation;
use classroom_courses::{Course, CreateCourse};
use classroom_students::{CreateStudent, Student};

fn course(id: i64, title: &str, instructors: &[&str]) -> Result<Course, Violation> {
    let cmd = CreateCourse::validate(
        Some(id),
        Some(title.to_string()),
        Some(instructors.iter().map(|s| s.to_string()).collect()),
    )?;
    Ok(cmd.into_course())
}

fn student(
    id: &str,
    first_name: &str,
    last_name: &str,
    program: &str,
    courses: Option<&[i64]>,
) -> Result<Student, Violation> {
    let cmd = CreateStudent::validate(
        Some(id.to_string()),
        Some(first_name.to_string()),
        Some(last_name.to_string()),
        Some(program.to_string()),
        courses.map(<[i64]>::to_vec),
        None,
    )?;
    Ok(cmd.into_student())
}

pub fn courses() -> Result<Vec<Course>, Violation> {
    Ok(vec![
        course(261207, "Basic Computer Engineering Lab", &["Dome", "Chanadda"])?,
        course(261497, "Full Stack Development", &["Dome", "Nirand", "Chanadda"])?,
        course(
            269101,
            "Introduction to Information Systems and Network Engineering",
            &["KENNETH COSH"],
        )?,
    ])
}

pub fn students() -> Result<Vec<Student>, Violation> {
    Ok(vec![
        student("650610001", "Matt", "Damon", "CPE", None)?,
        student("650610002", "Cillian", "Murphy", "CPE", Some(&[261207, 261497]))?,
        student("650610003", "Emily", "Blunt", "ISNE", Some(&[269101, 261497]))?,
    ])
}
