//! Route definitions.

use std::fmt;

use crate::views::ViewId;

/// A single entry in the route table: a path pattern, a logical name for
/// symbolic navigation, and the view shown when the route is active.
///
/// Paths are exact static strings. There are no dynamic segments, wildcards,
/// or nested routes in this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Exact path to match (e.g. "/watchers"). Must start with '/'.
    pub path: String,

    /// Unique logical identifier, used for navigation by name.
    pub name: String,

    /// Opaque handle to the view unit rendered when this route is active.
    /// The router never constructs or inspects the referenced view.
    pub view: ViewId,
}

impl Route {
    /// Create a route entry.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.name)
    }
}
