//! Request forwarding to a selected backend.
//!
//! # Responsibilities
//! - Rewrite the request URI onto the backend's base URL
//! - Strip hop-by-hop headers and record X-Forwarded-For
//! - Keep the client's Host, including an HTTP/2 authority
//! - Stream the backend response back to the client
//! - Map transport failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - Exactly one attempt per request, no failover
//! - Response bodies are streamed, never buffered
//! - Method, body and end-to-end headers pass through untouched

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{uri::InvalidUri, Request, StatusCode, Uri, Version},
    response::{IntoResponse, Response},
};
use url::{Position, Url};

use crate::http::headers::{
    append_forwarded_for, host_from_authority, strip_hop_by_hop, strip_request_hop_by_hop,
};
use crate::load_balancer::Backend;
use crate::net::TransportError;

/// Error type for a single forwarding attempt.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("could not build upstream URI: {0}")]
    Uri(#[from] InvalidUri),
    #[error("upstream request failed: {0}")]
    Transport(#[from] TransportError),
}

/// Relays a request to a backend and produces the client response.
pub trait Forward: Send + Sync {
    fn forward(
        &self,
        backend: &Backend,
        request: Request<Body>,
    ) -> impl Future<Output = Response> + Send;
}

/// Single-host reverse proxy over each backend's own transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forwarder;

impl Forwarder {
    /// Create a new forwarder.
    pub fn new() -> Self {
        Self
    }

    async fn try_forward(
        &self,
        backend: &Backend,
        request: Request<Body>,
    ) -> Result<Response, ForwardError> {
        let client_addr = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        let (mut parts, body) = request.into_parts();
        let uri = rewrite_uri(backend.address(), &parts.uri)?;

        host_from_authority(&mut parts.headers, &parts.uri);
        strip_request_hop_by_hop(&mut parts.headers);
        if let Some(ip) = client_addr {
            append_forwarded_for(&mut parts.headers, ip);
        }

        let mut outbound = Request::new(body);
        *outbound.method_mut() = parts.method;
        *outbound.uri_mut() = uri;
        *outbound.version_mut() = Version::HTTP_11;
        *outbound.headers_mut() = parts.headers;

        let response = backend.transport().send(outbound).await?;

        let (mut parts, body) = response.into_parts();
        strip_hop_by_hop(&mut parts.headers);
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

impl Forward for Forwarder {
    async fn forward(&self, backend: &Backend, request: Request<Body>) -> Response {
        match self.try_forward(backend, request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(backend = %backend.address(), error = %e, "Proxy error");
                StatusCode::BAD_GATEWAY.into_response()
            }
        }
    }
}

/// Point `uri` at `base`, joining paths with one slash and merging queries.
pub fn rewrite_uri(base: &Url, uri: &Uri) -> Result<Uri, InvalidUri> {
    let authority = &base[Position::BeforeHost..Position::AfterPort];
    let path = join_paths(base.path(), uri.path());

    let query = match (base.query().unwrap_or(""), uri.query().unwrap_or("")) {
        ("", q) | (q, "") => q.to_string(),
        (b, q) => format!("{b}&{q}"),
    };

    let mut target = format!("{}://{}{}", base.scheme(), authority, path);
    if !query.is_empty() {
        target.push('?');
        target.push_str(&query);
    }
    target.parse()
}

fn join_paths(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) => format!("{base}/{path}"),
        _ => format!("{base}{path}"),
    }
}
