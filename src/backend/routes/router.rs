/**
 * Router Configuration
 *
 * Combines the route groups into the application router.
 *
 * # Route Order
 *
 * 1. Authentication routes
 * 2. Treatment routes
 * 3. Fallback handler (JSON 404)
 *
 * Every request passes through a `TraceLayer`.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_treatment_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_auth_routes(router, &app_state);
    let router = configure_treatment_routes(router, &app_state);

    let router = router.fallback(|| async { BackendError::not_found("Route") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
