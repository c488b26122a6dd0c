//! Transport-error classification.
//!
//! # Responsibilities
//! - Map the HTTP stack's opaque errors onto the transport taxonomy
//! - Produce this crate's own stable messages for each failure shape
//!
//! # Design Decisions
//! - Classification inspects the error source chain; `reqwest` wraps the
//!   hyper error that distinguishes premature close from unparsable bytes
//! - Classification never attaches a status code; a failure classified here
//!   means no valid HTTP response was observed

use std::error::Error as StdError;

use crate::error::{TransportKind, UpstreamError};

/// Classify a failed send or body read into a transport error.
pub(crate) fn classify(err: &reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        return UpstreamError::transport(
            TransportKind::Timeout,
            "timed out while awaiting the upstream response",
        );
    }

    if err.is_connect() {
        return UpstreamError::transport(
            TransportKind::ConnectFailed,
            format!("failed to connect to upstream: {}", root_cause(err)),
        );
    }

    if let Some(hyper_err) = find_source::<hyper::Error>(err) {
        if hyper_err.is_incomplete_message() {
            return UpstreamError::transport(
                TransportKind::PrematureClose,
                "connection closed before a complete response was received",
            );
        }
        if hyper_err.is_parse() {
            return UpstreamError::transport(
                TransportKind::Malformed,
                "upstream sent bytes that could not be parsed as an HTTP response",
            );
        }
    }

    // Anything else below the HTTP semantic layer ends up here, e.g. a reset
    // mid-body. Reported as a premature close with the underlying cause.
    UpstreamError::transport(
        TransportKind::PrematureClose,
        format!("upstream connection failed: {}", root_cause(err)),
    )
}

/// Walk the source chain looking for an error of type `T`.
fn find_source<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    let mut source = err.source();
    while let Some(inner) = source {
        if let Some(found) = inner.downcast_ref::<T>() {
            return Some(found);
        }
        source = inner.source();
    }
    None
}

/// Innermost error description, for messages that carry the cause.
fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current: &(dyn StdError + 'static) = err;
    while let Some(inner) = current.source() {
        current = inner;
    }
    current.to_string()
}
