//! Round-robin scheduler.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::load_balancer::{backend::Backend, registry::BackendRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("backend pool is empty")]
    EmptyPool,
}

/// Round-robin selector over a frozen registry.
///
/// The cursor is private; the only way to move it is `next`, which claims a
/// slot with one atomic fetch-add so concurrent callers never share or lose
/// an increment.
#[derive(Debug)]
pub struct RoundRobin {
    registry: BackendRegistry,
    cursor: AtomicUsize,
}

impl RoundRobin {
    /// Create a scheduler whose cursor starts at the first backend.
    pub fn new(registry: BackendRegistry) -> Self {
        Self {
            registry,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Select the next backend in rotation.
    pub fn next(&self) -> Result<Arc<Backend>, SchedulerError> {
        let len = self.registry.len();
        if len == 0 {
            return Err(SchedulerError::EmptyPool);
        }

        let ticket = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.registry
            .get(ticket % len)
            .cloned()
            .ok_or(SchedulerError::EmptyPool)
    }

    /// The registry being rotated over.
    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }
}
