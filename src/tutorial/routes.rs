//! The tutorial route table.
//!
//! One entry per framework topic. Paths and names are part of the app's
//! external contract (bookmarks, links) and must not change.

use crate::routing::Route;
use crate::views::ViewId;

pub const HOME: ViewId = ViewId::new("home");
pub const DECLARATIVE_RENDERING: ViewId = ViewId::new("declarative-rendering");
pub const ATTRIBUTE_BINDINGS: ViewId = ViewId::new("attribute-bindings");
pub const FORM_BINDINGS: ViewId = ViewId::new("form-bindings");
pub const CONDITIONAL_RENDERING: ViewId = ViewId::new("conditional-rendering");
pub const LIST_RENDERING: ViewId = ViewId::new("list-rendering");
pub const COMPUTED_PROPERTY: ViewId = ViewId::new("computed-property");
pub const LIFECYCLE_TEMPLATE_REFS: ViewId = ViewId::new("lifecycle-template-refs");
pub const WATCHERS: ViewId = ViewId::new("watchers");

/// The full route table, in display order.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", "Home", HOME),
        Route::new("/declarative-rendering", "DeclarativeRendering", DECLARATIVE_RENDERING),
        Route::new("/attribute-bindings", "AttributeBindings", ATTRIBUTE_BINDINGS),
        Route::new("/form-bindings", "FormBindings", FORM_BINDINGS),
        Route::new("/conditional-rendering", "ConditionalRendering", CONDITIONAL_RENDERING),
        Route::new("/list-rendering", "ListRendering", LIST_RENDERING),
        Route::new("/computed-property", "ComputedProperty", COMPUTED_PROPERTY),
        Route::new("/lifecycle-template-refs", "LifecycleTemplateRefs", LIFECYCLE_TEMPLATE_REFS),
        Route::new("/watchers", "Watchers", WATCHERS),
    ]
}
