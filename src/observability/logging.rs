//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install an env-filtered fmt subscriber.
///
/// Defaults to `movies_client=debug` when `RUST_LOG` is unset. Safe to call
/// more than once; subsequent calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
