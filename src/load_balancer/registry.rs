//! Backend registry.
//!
//! # Responsibilities
//! - Hold the ordered set of backends assembled at startup
//! - Provide indexed access for the scheduler
//!
//! # Design Decisions
//! - `add` takes `&mut self`, so appending is only possible while the
//!   registry is still exclusively owned by startup code
//! - Once moved into the scheduler it is shared read-only

use std::sync::Arc;

use url::Url;

use crate::load_balancer::backend::Backend;

/// Ordered, build-once collection of backends.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    backends: Vec<Arc<Backend>>,
}

impl BackendRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry with one backend per address, in order.
    pub fn from_addresses(addresses: impl IntoIterator<Item = Url>) -> Self {
        let mut registry = Self::new();
        for address in addresses {
            registry.add(Backend::new(address));
        }
        registry
    }

    /// Append a backend. Only valid during the build phase.
    pub fn add(&mut self, backend: Backend) {
        tracing::debug!(backend = %backend.address(), slot = self.backends.len(), "Backend registered");
        self.backends.push(Arc::new(backend));
    }

    /// Number of registered backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Return true if no backend was registered.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Backend at `index`. Callers pass indices already reduced modulo `len()`.
    pub fn get(&self, index: usize) -> Option<&Arc<Backend>> {
        self.backends.get(index)
    }

    /// Backends in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Backend>> {
        self.backends.iter()
    }
}
