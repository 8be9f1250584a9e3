mod healthcheck;
mod search;
mod slip;
mod voters;

mod search_tests;
mod slip_tests;

use salvo::Router;

// Re-export route constants from core
pub use voterslip_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, VOTERS_ROUTE_COMPONENT, VOTERS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(voters::routes())
}
