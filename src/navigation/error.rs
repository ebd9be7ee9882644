//! Navigation error definitions.

use thiserror::Error;

use crate::routing::RouterError;
use crate::views::ViewError;

/// Errors surfaced by the navigation surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Resolution failed (see [`RouterError`] for the taxonomy).
    #[error(transparent)]
    Router(#[from] RouterError),

    /// The matched route references a view the registry does not know.
    #[error(transparent)]
    View(#[from] ViewError),
}
