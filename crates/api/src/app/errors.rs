use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use classroom_core::{DomainError, Violation, ViolationKind};
use classroom_infra::StoreError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Something is wrong, please try again";

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a handler can return.
///
/// The `IntoResponse` impl below is the one place error kinds become status
/// codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation(_) | DomainError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Store failures the service layer did not map surface as internal errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<Violation> for ApiError {
    fn from(v: Violation) -> Self {
        Self::Domain(DomainError::Validation(v))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::JsonDataError(_) => ViolationKind::InvalidType,
            _ => ViolationKind::EmptyOrMissing,
        };
        Self::from(Violation::new("body", kind, rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Domain(DomainError::invalid_input(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match &self {
            ApiError::Domain(DomainError::Validation(v)) => json!({
                "success": false,
                "message": "Validation failed",
                "error": v.message,
            }),
            ApiError::Domain(DomainError::InvalidInput(msg)) => json!({
                "success": false,
                "message": "Invalid input",
                "error": msg,
            }),
            ApiError::Domain(DomainError::NotFound(_) | DomainError::Conflict(_)) => json!({
                "success": false,
                "message": self.user_message(),
            }),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                return json_error(status, INTERNAL_ERROR_MESSAGE, msg.clone());
            }
        };
        (status, axum::Json(body)).into_response()
    }
}

impl ApiError {
    fn user_message(&self) -> String {
        match self {
            ApiError::Domain(DomainError::NotFound(what)) => format!("{what} not found"),
            ApiError::Domain(DomainError::Conflict(msg)) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Failure envelope with both `message` and `error`.
pub fn json_error(
    status: StatusCode,
    message: impl Into<String>,
    error: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
            "error": error.into(),
        })),
    )
        .into_response()
}
