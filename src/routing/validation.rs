//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation (the type system handles syntactic shape)
//! - Detect duplicate paths and duplicate names
//! - Check path and name well-formedness
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the candidate table
//! - Runs at registration, before the table is accepted

use std::collections::HashSet;

use thiserror::Error;

use crate::routing::route::Route;

/// A single defect found in a candidate route table.
///
/// Any of these is a configuration error: fatal at startup, never a runtime
/// condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two entries share the same path. First match would win silently;
    /// rejected instead.
    #[error("duplicate route path {path:?}")]
    DuplicatePath { path: String },

    /// Two entries share the same logical name.
    #[error("duplicate route name {name:?}")]
    DuplicateName { name: String },

    /// Path does not begin with '/'.
    #[error("route {name:?} has malformed path {path:?} (must start with '/')")]
    MalformedPath { name: String, path: String },

    /// Empty logical name.
    #[error("route for path {path:?} has an empty name")]
    EmptyName { path: String },
}

/// Validate a candidate route table.
///
/// Collects every violation rather than stopping at the first, so a bad
/// configuration surfaces completely in one startup failure.
pub fn validate_routes(routes: &[Route]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_paths = HashSet::new();
    let mut seen_names = HashSet::new();

    for route in routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::MalformedPath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName {
                path: route.path.clone(),
            });
        }
        if !seen_paths.insert(route.path.clone()) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
            });
        }
        if !route.name.is_empty() && !seen_names.insert(route.name.clone()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;

    fn route(path: &str, name: &'static str) -> Route {
        Route::new(path, name, ViewId::new(name))
    }

    #[test]
    fn test_valid_table() {
        let routes = vec![route("/", "Home"), route("/watchers", "Watchers")];
        assert!(validate_routes(&routes).is_ok());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let routes = vec![route("/", "Home"), route("/", "AlsoHome")];
        let errors = validate_routes(&routes).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicatePath { path: "/".into() }]
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let routes = vec![route("/", "Home"), route("/home", "Home")];
        let errors = validate_routes(&routes).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateName { name: "Home".into() }]
        );
    }

    #[test]
    fn test_all_errors_reported() {
        let routes = vec![
            route("no-slash", "Broken"),
            route("/", ""),
            route("/", "Home"),
        ];
        let errors = validate_routes(&routes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
