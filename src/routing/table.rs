//! The compiled route table.
//!
//! # Responsibilities
//! - Hold the ordered route list, frozen after construction
//! - O(1) lookup by exact path and by logical name
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Index maps point into the ordered list, so first match wins even
//!   though duplicates are rejected up front
//! - Exact string equality only; no patterns, so a map lookup is
//!   behaviorally identical to the linear scan it replaces

use std::collections::HashMap;

use crate::routing::error::RouterError;
use crate::routing::route::Route;
use crate::routing::validation::validate_routes;

/// Validated, immutable route table.
///
/// Built once at startup and read for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Routes in registration order.
    routes: Vec<Route>,

    /// Exact path -> index into `routes`.
    by_path: HashMap<String, usize>,

    /// Logical name -> index into `routes`.
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile a route table from an ordered route list.
    ///
    /// Fails with [`RouterError::Config`] if the list contains duplicate
    /// paths, duplicate names, or malformed entries.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouterError> {
        validate_routes(&routes).map_err(RouterError::Config)?;

        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());
        for (index, route) in routes.iter().enumerate() {
            by_path.insert(route.path.clone(), index);
            by_name.insert(route.name.clone(), index);
        }

        Ok(Self {
            routes,
            by_path,
            by_name,
        })
    }

    /// Look up a route by exact path.
    pub fn find_by_path(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&i| &self.routes[i])
    }

    /// Look up a route by logical name.
    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    /// All routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if the table has no entries. An empty table is valid; every
    /// lookup simply misses.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::validation::ValidationError;
    use crate::views::ViewId;

    fn route(path: &str, name: &'static str) -> Route {
        Route::new(path, name, ViewId::new(name))
    }

    #[test]
    fn test_lookup_by_path_and_name() {
        let table =
            RouteTable::new(vec![route("/", "Home"), route("/watchers", "Watchers")]).unwrap();

        assert_eq!(table.find_by_path("/watchers").unwrap().name, "Watchers");
        assert_eq!(table.find_by_name("Home").unwrap().path, "/");
        assert!(table.find_by_path("/missing").is_none());
        assert!(table.find_by_name("Missing").is_none());
    }

    #[test]
    fn test_duplicate_path_is_config_error() {
        let err = RouteTable::new(vec![route("/", "Home"), route("/", "Other")]).unwrap_err();
        match err {
            RouterError::Config(violations) => {
                assert_eq!(
                    violations,
                    vec![ValidationError::DuplicatePath { path: "/".into() }]
                );
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_preserves_registration_order() {
        let table =
            RouteTable::new(vec![route("/b", "B"), route("/a", "A"), route("/c", "C")]).unwrap();
        let names: Vec<_> = table.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.find_by_path("/").is_none());
    }
}
