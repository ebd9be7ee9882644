//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     Route[]
//!     → validation.rs (duplicate paths/names, well-formedness)
//!     → table.rs (index by path and by name)
//!     → Freeze as immutable RouteTable inside Resolver
//!
//! Incoming path (history event or programmatic navigation):
//!     → resolver.rs (exact-match lookup)
//!     → Return: matched Route or explicit NotFound
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - Exact string equality only; no patterns, no regex
//! - Deterministic: same path always resolves to the same route
//! - The resolver answers "what should be shown"; rendering and history
//!   are separate concerns

pub mod error;
pub mod resolver;
pub mod route;
pub mod table;
pub mod validation;

pub use error::RouterError;
pub use resolver::Resolver;
pub use route::Route;
pub use table::RouteTable;
pub use validation::ValidationError;
