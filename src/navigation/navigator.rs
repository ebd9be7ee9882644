//! Navigation surface composition.
//!
//! # Responsibilities
//! - Drive history, resolution, and view construction as one motion
//! - Apply the caller-supplied fallback policy on unmatched paths
//!
//! # Design Decisions
//! - Explicit dependency passing: one Navigator owns one Resolver, one
//!   history, one registry; no process-wide router instance
//! - Fallback is policy, not mechanism: the resolver stays NotFound-exact
//!   and the Navigator decides what an unmatched path means
//! - A fallback redirect replaces the current history entry, so back and
//!   forward still walk the paths the user actually visited

use tracing::warn;

use crate::history::MemoryHistory;
use crate::navigation::error::NavigationError;
use crate::routing::{Resolver, Route, RouterError};
use crate::views::{View, ViewRegistry};

/// What to do when a requested path matches no route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Surface the NotFound outcome to the caller.
    #[default]
    None,

    /// Show the route registered under this logical name instead.
    Route(String),
}

/// The view selected by a navigation, ready for the rendering surface.
pub struct ActiveView {
    /// Logical name of the matched route.
    pub name: String,

    /// Path the route is registered under (after any fallback redirect).
    pub path: String,

    /// The instantiated view unit.
    pub view: Box<dyn View>,
}

impl std::fmt::Debug for ActiveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveView")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish()
    }
}

/// Composes resolver, history, and view registry into a navigation surface.
#[derive(Debug)]
pub struct Navigator {
    resolver: Resolver,
    history: MemoryHistory,
    registry: ViewRegistry,
    fallback: Fallback,
}

impl Navigator {
    /// Create a navigator over a registered resolver and a view registry.
    /// History starts at `/`; the fallback policy defaults to [`Fallback::None`].
    pub fn new(resolver: Resolver, registry: ViewRegistry) -> Self {
        Self {
            resolver,
            history: MemoryHistory::new(),
            registry,
            fallback: Fallback::None,
        }
    }

    /// Set the fallback policy for unmatched paths.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Start from an existing history instead of a fresh one at `/`.
    pub fn with_history(mut self, history: MemoryHistory) -> Self {
        self.history = history;
        self
    }

    /// Navigate to a path: push it onto history, resolve it, and build the
    /// active view.
    pub fn open(&mut self, path: &str) -> Result<ActiveView, NavigationError> {
        self.history.push(path);
        self.show(path.to_string())
    }

    /// Navigate by logical route name.
    pub fn open_named(&mut self, name: &str) -> Result<ActiveView, NavigationError> {
        let path = self.resolver.navigate_by_name(name)?.to_string();
        self.open(&path)
    }

    /// Move back in history and re-resolve. Returns None at the oldest entry.
    pub fn back(&mut self) -> Result<Option<ActiveView>, NavigationError> {
        match self.history.back() {
            Some(path) => {
                let path = path.to_string();
                self.show(path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Move forward in history and re-resolve. Returns None at the newest entry.
    pub fn forward(&mut self) -> Result<Option<ActiveView>, NavigationError> {
        match self.history.forward() {
            Some(path) => {
                let path = path.to_string();
                self.show(path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// The path currently at the history cursor.
    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    /// The registered routes, for surfaces that list available destinations.
    pub fn routes(&self) -> &[Route] {
        self.resolver.table().map(|t| t.routes()).unwrap_or(&[])
    }

    fn show(&mut self, path: String) -> Result<ActiveView, NavigationError> {
        let route = match self.resolver.resolve(&path) {
            Ok(route) => route.clone(),
            Err(err @ RouterError::NotFound { .. }) => match self.fallback.clone() {
                Fallback::None => return Err(err.into()),
                Fallback::Route(name) => {
                    let fallback_path = self.resolver.navigate_by_name(&name)?.to_string();
                    let route = self.resolver.resolve(&fallback_path)?.clone();
                    warn!(requested = %path, redirected = %fallback_path, "unmatched path, applying fallback");
                    self.history.replace(fallback_path);
                    route
                }
            },
            Err(err) => return Err(err.into()),
        };

        let view = self.registry.instantiate(route.view)?;
        Ok(ActiveView {
            name: route.name,
            path: route.path,
            view,
        })
    }
}
