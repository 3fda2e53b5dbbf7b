//! Per-request dispatch.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::forward::Forward;
use crate::load_balancer::RoundRobin;

/// Body returned when there is no backend to forward to.
pub const SERVICE_NOT_AVAILABLE: &str = "Service not available";

/// Handle one inbound request: pick the next backend and forward to it.
///
/// An empty pool answers 503 without touching the forwarder.
pub async fn dispatch<F: Forward>(
    scheduler: &RoundRobin,
    forwarder: &F,
    request: Request<Body>,
) -> Response {
    let backend = match scheduler.next() {
        Ok(backend) => backend,
        Err(e) => {
            tracing::warn!(error = %e, path = %request.uri().path(), "No backend available");
            return (StatusCode::SERVICE_UNAVAILABLE, SERVICE_NOT_AVAILABLE).into_response();
        }
    };

    tracing::debug!(
        backend = %backend.address(),
        method = %request.method(),
        path = %request.uri().path(),
        "Dispatching request"
    );

    forwarder.forward(&backend, request).await
}
