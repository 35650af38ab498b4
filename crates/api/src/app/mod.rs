//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store-backed operations (student/course lookups and mutations)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and the JSON envelope
//! - `errors.rs`: error-kind to status-code translation

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over freshly seeded in-memory stores.
pub fn build_app(config: &ApiConfig) -> Result<Router, classroom_core::DomainError> {
    let services = services::AppServices::seeded(config.me_student_id.clone())?;
    Ok(router_with(Arc::new(services)))
}

/// Build the router around an existing set of services.
pub fn router_with(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_logger))
            .layer(CatchPanicLayer::custom(middleware::panic_response))
            .layer(Extension(services)),
    )
}
