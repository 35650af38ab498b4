use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
    Router,
};

use classroom_core::DomainError;
use classroom_courses::CourseId;

use crate::app::dto::{
    self, CreateCourseRequest, DeleteCourseRequest, JsonBody, PathParam, UpdateCourseRequest,
};
use crate::app::errors::ApiResult;
use crate::app::routes::system;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            post(create_course)
                .put(update_course)
                .delete(delete_course)
                .fallback(system::method_not_allowed),
        )
        .route("/:id", get(get_course).fallback(system::method_not_allowed))
}

pub async fn get_course(
    Extension(services): Extension<Arc<AppServices>>,
    PathParam(id): PathParam<String>,
) -> ApiResult<axum::response::Response> {
    let raw: i64 = id
        .parse()
        .map_err(|_| DomainError::invalid_input("courseId must be a number"))?;
    // Anything outside the six-digit range cannot be stored.
    let course_id = CourseId::parse(raw).map_err(|_| DomainError::not_found("Course"))?;
    let course = services.course(course_id)?;

    Ok(dto::success(
        StatusCode::OK,
        Some(format!("Get course {course_id} successfully")),
        course,
    ))
}

pub async fn create_course(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<CreateCourseRequest>,
) -> ApiResult<axum::response::Response> {
    let cmd = body.validate()?;
    let course = services.create_course(cmd)?;

    Ok(dto::success(
        StatusCode::CREATED,
        Some(format!("Course {} has been added successfully", course.course_id)),
        course,
    ))
}

pub async fn update_course(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<UpdateCourseRequest>,
) -> ApiResult<axum::response::Response> {
    let cmd = body.validate()?;
    let course = services.update_course(cmd)?;

    Ok(dto::success(
        StatusCode::OK,
        Some(format!("Course {} has been updated successfully", course.course_id)),
        course,
    ))
}

pub async fn delete_course(
    Extension(services): Extension<Arc<AppServices>>,
    JsonBody(body): JsonBody<DeleteCourseRequest>,
) -> ApiResult<axum::response::Response> {
    let cmd = body.validate()?;
    let course = services.delete_course(cmd)?;

    Ok(dto::success(
        StatusCode::OK,
        Some(format!("Course {} has been deleted successfully", course.course_id)),
        course,
    ))
}
