//! Outbound HTTP transport.
//!
//! # Responsibilities
//! - Send a fully rewritten request to a backend
//! - Pool keep-alive connections per backend
//!
//! # Design Decisions
//! - HTTP or HTTPS backends; the client speaks HTTP/1.1 to both
//! - Server certificates verified against the webpki root set
//! - No request-specific state, so one instance serves concurrent callers
//! - Cancellation is whatever dropping the response future gives

use axum::body::Body;
use axum::http::{Request, Response};
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

/// A transport-level failure: refused connection, DNS failure, reset, etc.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError(#[from] hyper_util::client::legacy::Error);

/// Forwarding capability bound to a single backend.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client<HttpsConnector<HttpConnector>, Body>,
}

impl Transport {
    /// Create a transport that can reach `http` and `https` backends.
    pub fn new() -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Self { client }
    }

    /// Send a request whose URI already points at the backend.
    pub async fn send(&self, request: Request<Body>) -> Result<Response<Incoming>, TransportError> {
        Ok(self.client.request(request).await?)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
