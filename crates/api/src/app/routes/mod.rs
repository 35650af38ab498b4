use axum::{routing::get, Router};

pub mod courses;
pub mod students;
pub mod system;

/// Router for every endpoint, with JSON 404/405 responses for unknown paths
/// and unserved methods.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health).fallback(system::method_not_allowed))
        .route("/me", get(students::me).fallback(system::method_not_allowed))
        .nest("/students", students::router())
        .nest("/courses", courses::router())
        .fallback(system::not_found)
}
