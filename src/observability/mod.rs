//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the client emits debug/warn events
//!   with url, status, and error fields
//! - Initialization lives here so embedding binaries and tests share it
//! - Log level configurable via the `RUST_LOG` environment variable

pub mod logging;
