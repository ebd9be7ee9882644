//! Demo views for the tutorial topics.
//!
//! Each view is a thin, self-contained unit: a title and a short feature
//! description. The routing machinery treats them as opaque.

use crate::tutorial::routes;
use crate::views::{View, ViewError, ViewRegistry};

/// A static text view for one tutorial topic.
pub struct TopicView {
    title: &'static str,
    body: &'static str,
}

impl TopicView {
    fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }
}

impl View for TopicView {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self) -> String {
        format!("=== {} ===\n{}", self.title, self.body)
    }
}

/// Build the registry of tutorial views, one factory per topic.
pub fn views() -> Result<ViewRegistry, ViewError> {
    let mut registry = ViewRegistry::new();

    registry.register(routes::HOME, || {
        TopicView::new("Home", "Pick a topic to see the feature demo.")
    })?;
    registry.register(routes::DECLARATIVE_RENDERING, || {
        TopicView::new(
            "Declarative Rendering",
            "Template output stays in sync with component state.",
        )
    })?;
    registry.register(routes::ATTRIBUTE_BINDINGS, || {
        TopicView::new(
            "Attribute Bindings",
            "Element attributes bound to dynamic expressions.",
        )
    })?;
    registry.register(routes::FORM_BINDINGS, || {
        TopicView::new(
            "Form Bindings",
            "Two-way binding between form inputs and state.",
        )
    })?;
    registry.register(routes::CONDITIONAL_RENDERING, || {
        TopicView::new(
            "Conditional Rendering",
            "Show or hide template fragments based on state.",
        )
    })?;
    registry.register(routes::LIST_RENDERING, || {
        TopicView::new("List Rendering", "Render a template fragment per list item.")
    })?;
    registry.register(routes::COMPUTED_PROPERTY, || {
        TopicView::new(
            "Computed Property",
            "Derived state recalculated from its dependencies.",
        )
    })?;
    registry.register(routes::LIFECYCLE_TEMPLATE_REFS, || {
        TopicView::new(
            "Lifecycle & Template Refs",
            "Hooks into mount/unmount and direct element references.",
        )
    })?;
    registry.register(routes::WATCHERS, || {
        TopicView::new("Watchers", "Side effects that run when watched state changes.")
    })?;

    Ok(registry)
}
