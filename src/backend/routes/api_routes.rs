/**
 * API Route Configuration
 *
 * ## Authentication
 * - `POST /sign-up` - public
 * - `POST /sign-in` - public
 * - `PATCH /change-password` - bearer token
 * - `DELETE /sign-out` - bearer token
 *
 * ## Treatments (all require a bearer token)
 * - `POST /treatments`, `GET /treatments`
 * - `GET /treatments/{id}`, `PATCH /treatments/{id}`, `DELETE /treatments/{id}`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};

use crate::backend::auth::{change_password, sign_in, sign_out, sign_up};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::treatments::{
    create_treatment, delete_treatment, get_treatment, list_treatments, update_treatment,
};

/// Add the authentication endpoints
pub fn configure_auth_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/change-password", patch(change_password))
        .route("/sign-out", delete(sign_out))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .merge(protected)
}

/// Add the treatment endpoints, all behind the auth middleware
pub fn configure_treatment_routes(
    router: Router<AppState>,
    app_state: &AppState,
) -> Router<AppState> {
    let treatments = Router::new()
        .route("/treatments", post(create_treatment).get(list_treatments))
        .route(
            "/treatments/{id}",
            get(get_treatment)
                .patch(update_treatment)
                .delete(delete_treatment),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(treatments)
}
