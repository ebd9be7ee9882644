//! Client-side navigation for a tutorial single-page application.
//!
//! # Architecture Overview
//!
//! ```text
//!   Path change (history event           Programmatic navigation
//!   or link activation)                  (by logical route name)
//!        │                                     │
//!        ▼                                     ▼
//!   ┌─────────┐      ┌──────────────┐    ┌──────────────┐
//!   │ history │─────▶│  navigation  │◀───│   routing    │
//!   │  stack  │      │   surface    │    │   resolver   │
//!   └─────────┘      └──────┬───────┘    └──────────────┘
//!                           │
//!                           ▼
//!                    ┌──────────────┐
//!                    │    views     │  (opaque units, built on demand)
//!                    │   registry   │
//!                    └──────────────┘
//! ```
//!
//! The route table is declared once at startup, validated, and frozen.
//! Resolution is exact-match, pure, and synchronous; an unmatched path is an
//! explicit NotFound, and what to do about it is the caller's policy.

// Core subsystems
pub mod history;
pub mod navigation;
pub mod routing;
pub mod views;

// The tutorial app's catalog (routes + demo views)
pub mod tutorial;

// Cross-cutting concerns
pub mod observability;

pub use navigation::{ActiveView, Fallback, NavigationError, Navigator};
pub use routing::{Resolver, Route, RouteTable, RouterError};
pub use views::{View, ViewId, ViewRegistry};
