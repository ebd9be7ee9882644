//! Path-to-view resolution.
//!
//! # Responsibilities
//! - Hold the registered route table
//! - Answer "which route is active for this path"
//! - Translate logical names to paths for programmatic navigation
//!
//! # Design Decisions
//! - Two states only: Unregistered and Registered; `register` is the single,
//!   terminal transition
//! - Resolution is pure and idempotent; the resolver never touches history
//!   or triggers rendering
//! - Explicit NotFound rather than a silent default; fallback is the
//!   caller's decision

use tracing::debug;

use crate::routing::error::RouterError;
use crate::routing::route::Route;
use crate::routing::table::RouteTable;

/// The route resolver.
///
/// Created empty, registered once with an immutable route table, then
/// queried for the lifetime of the application. Construct one instance at
/// startup and pass it to whatever navigation surface needs it; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct Resolver {
    table: Option<RouteTable>,
}

impl Resolver {
    /// Create an unregistered resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver and register its table in one step.
    pub fn with_routes(routes: Vec<Route>) -> Result<Self, RouterError> {
        let mut resolver = Self::new();
        resolver.register(routes)?;
        Ok(resolver)
    }

    /// Register the route table. The table is validated, frozen, and held
    /// for the lifetime of the resolver.
    ///
    /// Fails with [`RouterError::Config`] on an invalid table and
    /// [`RouterError::AlreadyRegistered`] on a second call.
    pub fn register(&mut self, routes: Vec<Route>) -> Result<(), RouterError> {
        if self.table.is_some() {
            return Err(RouterError::AlreadyRegistered);
        }
        let table = RouteTable::new(routes)?;
        debug!(routes = table.len(), "route table registered");
        self.table = Some(table);
        Ok(())
    }

    /// Resolve a requested path to its route by exact match.
    ///
    /// Returns [`RouterError::NotFound`] for an unmatched path and
    /// [`RouterError::NotInitialized`] before registration.
    pub fn resolve(&self, path: &str) -> Result<&Route, RouterError> {
        let table = self.table.as_ref().ok_or(RouterError::NotInitialized)?;
        match table.find_by_path(path) {
            Some(route) => {
                debug!(path, name = %route.name, "resolved");
                Ok(route)
            }
            None => Err(RouterError::NotFound { path: path.into() }),
        }
    }

    /// Return the path registered under a logical name, for programmatic
    /// navigation.
    ///
    /// Returns [`RouterError::NameNotFound`] for an unknown name and
    /// [`RouterError::NotInitialized`] before registration.
    pub fn navigate_by_name(&self, name: &str) -> Result<&str, RouterError> {
        let table = self.table.as_ref().ok_or(RouterError::NotInitialized)?;
        table
            .find_by_name(name)
            .map(|route| route.path.as_str())
            .ok_or_else(|| RouterError::NameNotFound { name: name.into() })
    }

    /// The registered table, if any. Mostly useful for listing routes in a
    /// navigation surface.
    pub fn table(&self) -> Option<&RouteTable> {
        self.table.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;

    fn routes() -> Vec<Route> {
        vec![
            Route::new("/", "Home", ViewId::new("home")),
            Route::new("/watchers", "Watchers", ViewId::new("watchers")),
        ]
    }

    #[test]
    fn test_resolve_before_register_fails() {
        let resolver = Resolver::new();
        assert_eq!(resolver.resolve("/"), Err(RouterError::NotInitialized));
        assert_eq!(
            resolver.navigate_by_name("Home"),
            Err(RouterError::NotInitialized)
        );
    }

    #[test]
    fn test_register_is_terminal() {
        let mut resolver = Resolver::with_routes(routes()).unwrap();
        assert_eq!(
            resolver.register(routes()),
            Err(RouterError::AlreadyRegistered)
        );
        // Original table survives the rejected call.
        assert!(resolver.resolve("/").is_ok());
    }

    #[test]
    fn test_resolve_exact_match() {
        let resolver = Resolver::with_routes(routes()).unwrap();
        let route = resolver.resolve("/watchers").unwrap();
        assert_eq!(route.name, "Watchers");

        // Exact equality, not prefix matching.
        assert_eq!(
            resolver.resolve("/watchers/extra"),
            Err(RouterError::NotFound {
                path: "/watchers/extra".into()
            })
        );
    }

    #[test]
    fn test_navigate_by_name() {
        let resolver = Resolver::with_routes(routes()).unwrap();
        assert_eq!(resolver.navigate_by_name("Watchers").unwrap(), "/watchers");
        assert_eq!(
            resolver.navigate_by_name("DoesNotExist"),
            Err(RouterError::NameNotFound {
                name: "DoesNotExist".into()
            })
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = Resolver::with_routes(routes()).unwrap();
        let first = resolver.resolve("/").unwrap().clone();
        for _ in 0..3 {
            assert_eq!(resolver.resolve("/").unwrap(), &first);
        }
    }

    #[test]
    fn test_bad_table_leaves_resolver_unregistered() {
        let mut resolver = Resolver::new();
        let bad = vec![
            Route::new("/", "Home", ViewId::new("home")),
            Route::new("/", "Other", ViewId::new("other")),
        ];
        assert!(matches!(
            resolver.register(bad),
            Err(RouterError::Config(_))
        ));
        // Still unregistered; a corrected table can be installed.
        assert_eq!(resolver.resolve("/"), Err(RouterError::NotInitialized));
        assert!(resolver.register(routes()).is_ok());
    }
}
