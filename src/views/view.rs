//! View identifiers and the renderable-unit trait.

use std::fmt;

/// Opaque identifier for an externally implemented view unit.
///
/// The router holds these purely as handles; it never constructs or mutates
/// the referenced view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(&'static str);

impl ViewId {
    /// Create a view identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A self-contained, independently rendered piece of UI.
///
/// Implementations live outside the routing machinery; the navigation
/// surface only ever asks a view to describe itself.
pub trait View {
    /// Human-facing title.
    fn title(&self) -> &str;

    /// Render the view's content for the surface to display.
    fn render(&self) -> String;
}
