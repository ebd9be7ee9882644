//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! open(path) / open_named(name):
//!     → history (push or redirect-replace)
//!     → resolver (exact match, fallback policy on NotFound)
//!     → view registry (instantiate on demand)
//!     → ActiveView { name, path, view } for the rendering surface
//!
//! back() / forward():
//!     → history (move cursor)
//!     → re-resolve the now-current path
//! ```
//!
//! # Design Decisions
//! - One Navigator instance, passed explicitly; nothing global
//! - Whether an unmatched path falls back to a named route or surfaces
//!   NotFound is the caller's choice, made once at construction

pub mod error;
pub mod navigator;

pub use error::NavigationError;
pub use navigator::{ActiveView, Fallback, Navigator};
