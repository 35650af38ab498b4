use std::any::Any;
use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::app::errors::{json_error, INTERNAL_ERROR_MESSAGE};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Access log: one line per request with method, path, status and latency.
///
/// Each request gets a UUIDv7 id, attached to the handler's span and echoed in
/// the `x-request-id` response header.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let span = tracing::info_span!("request", %request_id, %method, %path);
    let mut response = next.run(req).instrument(span).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if response.status().is_server_error() {
        tracing::error!(%request_id, %method, %path, status, elapsed_ms, "request completed");
    } else if response.status().is_client_error() {
        tracing::warn!(%request_id, %method, %path, status, elapsed_ms, "request completed");
    } else {
        tracing::info!(%request_id, %method, %path, status, elapsed_ms, "request completed");
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Turn a handler panic into the generic 500 envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "handler panicked");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn panic_payload_becomes_internal_error() {
        let resp = panic_response(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert_eq!(body["error"], "boom");
    }

    #[test]
    fn string_panic_payload_is_kept() {
        let resp = panic_response(Box::new(String::from("index out of bounds")));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
