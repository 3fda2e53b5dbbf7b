//! Backend list validation.
//!
//! # Responsibilities
//! - Split the comma-separated backend list
//! - Parse every entry as an absolute URL
//! - Reject entries the transport cannot reach (schemes other than http/https, no host)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: &str → Result<Vec<Url>, Vec<ValidationError>>

use url::Url;

/// A single rejected backend entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("backend entry {position} is empty")]
    EmptyEntry { position: usize },
    #[error("backend {entry:?} is not a valid URL: {source}")]
    InvalidUrl {
        entry: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend {entry:?} uses unsupported scheme {scheme:?}")]
    UnsupportedScheme { entry: String, scheme: String },
    #[error("backend {entry:?} has no host")]
    MissingHost { entry: String },
}

/// Parse a comma-separated backend list into base URLs, preserving order.
pub fn parse_backend_list(list: &str) -> Result<Vec<Url>, Vec<ValidationError>> {
    let mut backends = Vec::new();
    let mut errors = Vec::new();

    for (position, entry) in list.split(',').map(str::trim).enumerate() {
        match parse_backend(position, entry) {
            Ok(url) => backends.push(url),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(backends)
    } else {
        Err(errors)
    }
}

fn parse_backend(position: usize, entry: &str) -> Result<Url, ValidationError> {
    if entry.is_empty() {
        return Err(ValidationError::EmptyEntry { position });
    }

    let url = Url::parse(entry).map_err(|source| ValidationError::InvalidUrl {
        entry: entry.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme {
            entry: entry.to_string(),
            scheme: url.scheme().to_string(),
        });
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingHost {
            entry: entry.to_string(),
        });
    }

    Ok(url)
}
