//! View registry with deferred construction.
//!
//! # Responsibilities
//! - Map view identifiers to factories
//! - Construct a view on demand when a route activates it
//!
//! # Design Decisions
//! - Factories, not instances: a view is built only when the surface
//!   actually shows it
//! - Duplicate registration is a configuration error, same discipline as
//!   the route table
//! - Built once at startup, read thereafter

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::views::view::{View, ViewId};

/// Constructs a view instance on demand.
pub type ViewFactory = Box<dyn Fn() -> Box<dyn View> + Send + Sync>;

/// Errors from view registration and instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A factory is already registered under this identifier.
    #[error("view {id} registered twice")]
    DuplicateView { id: ViewId },

    /// A route references a view no factory was registered for.
    #[error("no view registered for {id}")]
    UnknownView { id: ViewId },
}

/// The set of registered view factories.
#[derive(Default)]
pub struct ViewRegistry {
    factories: HashMap<ViewId, ViewFactory>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a view identifier.
    pub fn register<F, V>(&mut self, id: ViewId, factory: F) -> Result<(), ViewError>
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: View + 'static,
    {
        if self.factories.contains_key(&id) {
            return Err(ViewError::DuplicateView { id });
        }
        self.factories
            .insert(id, Box::new(move || Box::new(factory())));
        Ok(())
    }

    /// Construct the view registered under `id`.
    pub fn instantiate(&self, id: ViewId) -> Result<Box<dyn View>, ViewError> {
        match self.factories.get(&id) {
            Some(factory) => {
                debug!(view = %id, "view instantiated");
                Ok(factory())
            }
            None => Err(ViewError::UnknownView { id }),
        }
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.factories.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(&'static str);

    impl View for Stub {
        fn title(&self) -> &str {
            self.0
        }
        fn render(&self) -> String {
            format!("[{}]", self.0)
        }
    }

    #[test]
    fn test_instantiate_on_demand() {
        let mut registry = ViewRegistry::new();
        let id = ViewId::new("home");
        registry.register(id, || Stub("Home")).unwrap();

        let view = registry.instantiate(id).unwrap();
        assert_eq!(view.title(), "Home");
        assert_eq!(view.render(), "[Home]");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ViewRegistry::new();
        let id = ViewId::new("home");
        registry.register(id, || Stub("Home")).unwrap();
        assert_eq!(
            registry.register(id, || Stub("Other")),
            Err(ViewError::DuplicateView { id })
        );
    }

    #[test]
    fn test_unknown_view() {
        let registry = ViewRegistry::new();
        let id = ViewId::new("missing");
        assert!(matches!(
            registry.instantiate(id),
            Err(ViewError::UnknownView { .. })
        ));
    }
}
