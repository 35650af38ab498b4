use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use classroom_core::Violation;
use classroom_courses::{CourseSummary, CreateCourse, DeleteCourse, UpdateCourse};
use classroom_students::StudentId;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// JSON body extractor whose rejections use the API error envelope.
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Path extractor with the same envelope on rejection.
#[derive(Debug, axum::extract::FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

/// Accepts any JSON number with an integral value (`261999` or `261999.0`).
fn integral<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Other(&number.to_string()),
            &"an integer",
        )),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[serde(default, deserialize_with = "integral")]
    pub course_id: Option<i64>,
    pub course_title: Option<String>,
    pub instructors: Option<Vec<String>>,
}

impl CreateCourseRequest {
    pub fn validate(self) -> Result<CreateCourse, Violation> {
        CreateCourse::validate(self.course_id, self.course_title, self.instructors)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "integral")]
    pub course_id: Option<i64>,
    pub course_title: Option<String>,
    pub instructors: Option<Vec<String>>,
}

impl UpdateCourseRequest {
    pub fn validate(self) -> Result<UpdateCourse, Violation> {
        UpdateCourse::validate(self.course_id, self.course_title, self.instructors)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCourseRequest {
    #[serde(default, deserialize_with = "integral")]
    pub course_id: Option<i64>,
}

impl DeleteCourseRequest {
    pub fn validate(self) -> Result<DeleteCourse, Violation> {
        DeleteCourse::validate(self.course_id)
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// Success envelope: `{success: true, message?, data}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourses {
    pub student_id: StudentId,
    pub courses: Vec<CourseSummary>,
}

pub fn success<T: Serialize>(
    status: StatusCode,
    message: Option<String>,
    data: T,
) -> axum::response::Response {
    let envelope = Envelope {
        success: true,
        message,
        data,
    };
    (status, axum::Json(envelope)).into_response()
}
