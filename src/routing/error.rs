//! Router error definitions.

use thiserror::Error;

use crate::routing::validation::ValidationError;

/// Errors produced by the route resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Route table rejected at registration. Fatal at startup; carries every
    /// violation found, not just the first.
    #[error("invalid route table: {}", format_violations(.0))]
    Config(Vec<ValidationError>),

    /// `register` called on a resolver that already holds a table.
    /// Registration is terminal; this is a programming error.
    #[error("resolver already registered")]
    AlreadyRegistered,

    /// Resolver used before `register`. Programming error.
    #[error("resolver not initialized")]
    NotInitialized,

    /// No route matches the requested path. Recoverable; the caller decides
    /// fallback behavior.
    #[error("no route matches path {path:?}")]
    NotFound { path: String },

    /// Navigation by a logical name absent from the table. Recoverable;
    /// callers should surface it as a logic error.
    #[error("no route named {name:?}")]
    NameNotFound { name: String },
}

fn format_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RouterError {
    /// True for the recoverable outcomes (`NotFound`, `NameNotFound`); the
    /// remaining variants indicate configuration or programming errors.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RouterError::NotFound { .. } | RouterError::NameNotFound { .. }
        )
    }
}
