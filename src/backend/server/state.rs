/**
 * Application State
 *
 * `AppState` holds the two services every handler needs. Both wrap the
 * same `Arc<dyn Store>`; cloning the state is cheap. `FromRef` lets
 * handlers and middleware extract just the service they use.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::store::Store;
use crate::backend::treatments::service::TreatmentService;

/// Application state shared by all routes
#[derive(Clone)]
pub struct AppState {
    /// Sign-up, sign-in, password change, sign-out and token resolution
    pub auth: AuthService,

    /// Ownership-aware treatment CRUD
    pub treatments: TreatmentService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, hasher: CredentialHasher) -> Self {
        Self {
            auth: AuthService::new(store.clone(), hasher),
            treatments: TreatmentService::new(store),
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for TreatmentService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.treatments.clone()
    }
}
