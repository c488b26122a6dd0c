//! Normalized error type for upstream calls.
//!
//! # Responsibilities
//! - Unify transport, remote, and decode failures into one type
//! - Carry a human-readable message on every failure path
//! - Carry the upstream status code only when a valid HTTP response arrived
//!
//! # Design Decisions
//! - Callers never observe raw transport-level error types
//! - Transport messages use this crate's own stable wording, not the
//!   underlying stack's exception text
//! - Constructed exactly once per failed call, immutable thereafter

use reqwest::StatusCode;
use thiserror::Error;

/// Failure below the HTTP semantic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The connection could not be established at all.
    ConnectFailed,

    /// The server accepted the connection but closed it before a complete
    /// response was received.
    PrematureClose,

    /// The server sent bytes that could not be parsed as an HTTP response.
    Malformed,

    /// A per-phase or aggregate timeout budget was exceeded.
    Timeout,
}

/// Classification of an upstream call failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection, timeout, or malformed-bytes failure. Never carries a
    /// status code.
    Transport(TransportKind),

    /// A syntactically valid HTTP response with a non-success status.
    /// Always carries the status code.
    Remote,

    /// A success response whose body did not match the expected schema.
    Decode,
}

/// The single error type surfaced by every failed upstream call.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UpstreamError {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
}

impl UpstreamError {
    /// Build a transport error with a descriptive message. No status code.
    pub(crate) fn transport(kind: TransportKind, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport(kind),
            message: message.into(),
            status: None,
        }
    }

    /// Build a remote error from a received status and body text.
    ///
    /// The body is used verbatim as the message when non-empty; otherwise a
    /// status-derived fallback keeps the message guarantee.
    pub(crate) fn remote(status: StatusCode, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("upstream returned status {}", status)
        } else {
            body.to_string()
        };
        Self {
            kind: ErrorKind::Remote,
            message,
            status: Some(status),
        }
    }

    /// Build a decode error for a success response with an unexpected body.
    pub(crate) fn decode(detail: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Decode,
            message: format!("response body did not match the expected schema: {}", detail),
            status: None,
        }
    }

    /// The failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description. Never empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Upstream status code, present only for remote errors.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// True for any failure below the HTTP semantic layer.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// True when a valid HTTP error response was received.
    pub fn is_remote(&self) -> bool {
        self.kind == ErrorKind::Remote
    }

    /// True when any timeout budget was exceeded.
    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Transport(TransportKind::Timeout)
    }
}
