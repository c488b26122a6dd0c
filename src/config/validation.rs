//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is absolute http/https
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted by the client

use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem found in a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The base URL could not be parsed.
    InvalidBaseUrl(String),

    /// The base URL uses a scheme other than http/https.
    UnsupportedScheme(String),

    /// A timeout budget is zero.
    ZeroTimeout(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl(detail) => {
                write!(f, "invalid base_url: {}", detail)
            }
            ValidationError::UnsupportedScheme(scheme) => {
                write!(f, "unsupported base_url scheme: {}", scheme)
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "timeout {} must be greater than zero", field)
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(e.to_string())),
    }

    if config.timeouts.connect_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_ms"));
    }
    if config.timeouts.write_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("write_ms"));
    }
    if config.timeouts.read_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("read_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
