/**
 * Server Initialization
 *
 * Builds the application state from configuration and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Open the record store (PostgreSQL or in-memory)
 * 2. Create the credential hasher with the configured cost
 * 3. Build `AppState` and the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::password::CredentialHasher;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{Store, StoreError};

/// Create and configure the Axum application from `config`
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing dentrack backend server");

    let store = load_store(config).await?;
    let app = build_app(store, CredentialHasher::new(config.bcrypt_cost));

    tracing::info!("Router configured (bcrypt cost {})", config.bcrypt_cost);
    Ok(app)
}

/// Assemble the router over an already opened store
pub fn build_app(store: Arc<dyn Store>, hasher: CredentialHasher) -> Router<()> {
    create_router(AppState::new(store, hasher))
}
