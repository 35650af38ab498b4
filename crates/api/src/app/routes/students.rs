use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::get,
    Router,
};

use classroom_students::StudentId;

use crate::app::dto::{self, EnrolledCourses, PathParam};
use crate::app::errors::ApiResult;
use crate::app::routes::system;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route(
        "/:id/courses",
        get(enrolled_courses).fallback(system::method_not_allowed),
    )
}

pub async fn me(
    Extension(services): Extension<Arc<AppServices>>,
) -> ApiResult<axum::response::Response> {
    let student = services.current_student()?;
    Ok(dto::success(StatusCode::OK, None, student))
}

pub async fn enrolled_courses(
    Extension(services): Extension<Arc<AppServices>>,
    PathParam(id): PathParam<String>,
) -> ApiResult<axum::response::Response> {
    let student_id = StudentId::parse(id)?;
    let courses = services.enrolled_courses(&student_id)?;

    Ok(dto::success(
        StatusCode::OK,
        Some(format!("Get courses detail of student {student_id}")),
        EnrolledCourses {
            student_id,
            courses,
        },
    ))
}
