//! Navigation provider subsystem.
//!
//! # Data Flow
//! ```text
//! User navigation (link click, back/forward):
//!     → memory.rs (update visit stack, move cursor)
//!     → new current path handed to the navigator for resolution
//! ```
//!
//! # Design Decisions
//! - Synchronous, single-threaded: events are delivered one at a time
//! - History stores raw paths; matching them to routes is the resolver's job

pub mod memory;

pub use memory::MemoryHistory;
