//! The tutorial application catalog: its route table and demo views.
//!
//! This is configuration-as-code. The routing machinery lives in the other
//! subsystems; this module only declares what the tutorial app contains.

pub mod routes;
pub mod views;

pub use routes::routes;
pub use views::views;

use crate::navigation::Navigator;
use crate::routing::Resolver;

/// Build a ready-to-use navigator over the tutorial catalog.
pub fn navigator() -> Result<Navigator, crate::navigation::NavigationError> {
    let resolver = Resolver::with_routes(routes())?;
    let registry = views()?;
    Ok(Navigator::new(resolver, registry))
}
