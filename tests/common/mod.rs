//! Shared helpers for integration tests.

use view_router::Navigator;

/// Navigator over the full tutorial catalog, no fallback policy.
pub fn tutorial_navigator() -> Navigator {
    view_router::tutorial::navigator().expect("tutorial catalog must be valid")
}
