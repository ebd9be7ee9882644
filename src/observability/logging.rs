//! Structured logging initialization.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//! - Respect RUST_LOG, with a sensible crate-level default
//!
//! # Design Decisions
//! - Library code only emits events; only binaries install a subscriber

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `default_filter`
/// (e.g. `"view_router=debug"`). Call once, from a binary.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
