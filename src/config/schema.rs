//! Validated runtime configuration.

use std::net::{Ipv4Addr, SocketAddr};

use url::Url;

use crate::config::cli::Cli;
use crate::config::validation::{parse_backend_list, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("please provide one or more backends to load balance")]
    MissingBackends,
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Root configuration for the load balancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancerConfig {
    /// Port the listener binds on all interfaces.
    pub port: u16,

    /// Backend base URLs, in the order given on the command line.
    pub backends: Vec<Url>,
}

impl BalancerConfig {
    /// Validate parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.backends.trim().is_empty() {
            return Err(ConfigError::MissingBackends);
        }
        let backends = parse_backend_list(&cli.backends).map_err(ConfigError::Validation)?;
        Ok(Self {
            port: cli.port,
            backends,
        })
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
