//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; events carry the path and route name
//! - The library never installs a subscriber; binaries do

pub mod logging;
