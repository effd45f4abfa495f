//! Tracing subscriber setup for applications embedding glowcard.

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `info`. Fails if a global subscriber is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_tracing`] with a caller-chosen fallback filter.
pub fn init_tracing_with(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
