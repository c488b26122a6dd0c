//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the movies client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the upstream movies service (e.g., "http://localhost:8088").
    pub base_url: String,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8088".to_string(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

/// Per-phase timeout budgets for a single upstream call.
///
/// The aggregate budget (connect + write + read) bounds the whole round trip;
/// exceeding any phase budget aborts the in-flight call.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in milliseconds.
    pub connect_ms: u64,

    /// Request write timeout in milliseconds.
    pub write_ms: u64,

    /// Response read timeout in milliseconds.
    pub read_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: 5_000,
            write_ms: 5_000,
            read_ms: 5_000,
        }
    }
}

impl TimeoutConfig {
    /// Connect timeout as a [`Duration`].
    pub fn connect(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }

    /// Write timeout as a [`Duration`].
    pub fn write(&self) -> Duration {
        Duration::from_millis(self.write_ms)
    }

    /// Read timeout as a [`Duration`].
    pub fn read(&self) -> Duration {
        Duration::from_millis(self.read_ms)
    }

    /// Aggregate budget bounding the entire call.
    pub fn aggregate(&self) -> Duration {
        self.connect() + self.write() + self.read()
    }
}
