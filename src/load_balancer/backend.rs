//! Backend abstraction.
//!
//! # Responsibilities
//! - Represent a single backend server
//! - Own the transport used to reach it
//! - Carry a liveness flag reserved for health checking

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use url::Url;

use crate::net::Transport;

/// A single backend server.
#[derive(Debug)]
pub struct Backend {
    /// Base URL requests are rewritten onto.
    address: Url,
    /// Liveness flag. Starts true; nothing transitions it yet.
    alive: AtomicBool,
    /// Forwarding transport bound to `address`.
    transport: Transport,
}

impl Backend {
    /// Create a new backend with a fresh transport.
    pub fn new(address: Url) -> Self {
        Self {
            address,
            alive: AtomicBool::new(true),
            transport: Transport::new(),
        }
    }

    /// Base URL this backend is reached at.
    pub fn address(&self) -> &Url {
        &self.address
    }

    /// Current liveness flag. Always true until health checking exists.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Transport shared by every request routed here.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
