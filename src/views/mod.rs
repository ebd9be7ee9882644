//! View subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     view factories → registry.rs (register by ViewId)
//!
//! Route activation:
//!     Route.view (opaque ViewId)
//!     → registry.rs (instantiate on demand)
//!     → Box<dyn View> handed to the rendering surface
//! ```
//!
//! # Design Decisions
//! - Views are opaque to the router: referenced by identifier, constructed
//!   lazily, never inspected
//! - Registry is populated once at startup, read thereafter

pub mod registry;
pub mod view;

pub use registry::{ViewError, ViewFactory, ViewRegistry};
pub use view::{View, ViewId};
