//! Resilient HTTP client library for the movies service.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;

pub use client::MoviesClient;
pub use config::schema::ClientConfig;
pub use error::{ErrorKind, TransportKind, UpstreamError};
pub use model::Movie;
