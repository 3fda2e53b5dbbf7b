//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a catch-all handler
//! - Wire up request tracing
//! - Serve on a bound listener until shutdown
//! - Hand every request to the dispatcher

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::BalancerConfig;
use crate::http::{dispatch::dispatch, forward::Forwarder};
use crate::load_balancer::{BackendRegistry, RoundRobin};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<RoundRobin>,
    pub forwarder: Forwarder,
}

/// HTTP server for the load balancer.
pub struct HttpServer {
    router: Router,
    scheduler: Arc<RoundRobin>,
}

impl HttpServer {
    /// Create a server balancing over the configured backends.
    pub fn new(config: &BalancerConfig) -> Self {
        Self::with_registry(BackendRegistry::from_addresses(config.backends.iter().cloned()))
    }

    /// Create a server over an already built registry.
    pub fn with_registry(registry: BackendRegistry) -> Self {
        let scheduler = Arc::new(RoundRobin::new(registry));
        let state = AppState {
            scheduler: scheduler.clone(),
            forwarder: Forwarder::new(),
        };

        Self {
            router: Self::build_router(state),
            scheduler,
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backends = self.scheduler.registry().len(),
            "Load Balancer started"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Router without a socket, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the scheduler.
    pub fn scheduler(&self) -> &RoundRobin {
        &self.scheduler
    }
}

async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    dispatch(&state.scheduler, &state.forwarder, request).await
}
