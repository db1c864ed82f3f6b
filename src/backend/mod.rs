//! Backend Module
//!
//! Server-side code for the dentrack API: an Axum HTTP server in front of
//! the authentication core and the treatment service.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Credential hashing, tokens, ownership guard, auth flows
//! - **`treatments`** - Ownership-aware treatment CRUD
//! - **`middleware`** - Bearer token resolution
//! - **`store`** - Record store trait with PostgreSQL and in-memory backends
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Request Flow
//!
//! 1. Auth endpoints go straight to `AuthService`
//! 2. Protected endpoints pass `auth_middleware`, which resolves the bearer
//!    token to an `AuthenticatedUser` stored in the request extensions
//! 3. Handlers pass that identity explicitly into the services
//! 4. Services return `Result<_, BackendError>`; the error's `IntoResponse`
//!    picks the status code
//!
//! # Thread Safety
//!
//! Services are cheap `Clone` handles over an `Arc<dyn Store>`. The store
//! is the only shared mutable state. bcrypt work runs on tokio's blocking
//! pool.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Treatment records
pub mod treatments;

/// Middleware for request processing
pub mod middleware;

/// Persistence
pub mod store;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{build_app, create_app, AppState, ServerConfig};
