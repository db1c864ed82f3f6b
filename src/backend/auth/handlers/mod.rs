//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Handlers only unpack
//! the request and delegate to [`AuthService`](crate::backend::auth::service::AuthService).
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /sign-up - User registration
//! - **`sign_in`** - POST /sign-in - Credential check and token issue
//! - **`change_password`** - PATCH /change-password - Requires bearer token
//! - **`sign_out`** - DELETE /sign-out - Requires bearer token
//!
//! # Example
//!
//! ```rust,no_run
//! use dentrack::backend::auth::handlers::{sign_in, sign_up};
//! use axum::{routing::post, Router};
//! use dentrack::backend::server::AppState;
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/sign-up", post(sign_up))
//!     .route("/sign-in", post(sign_in))
//! # }
//! ```

/// Request and response types
pub mod types;

/// Sign-up handler
pub mod sign_up;

/// Sign-in handler
pub mod sign_in;

/// Change-password handler
pub mod change_password;

/// Sign-out handler
pub mod sign_out;

// Re-export commonly used types
pub use types::{ChangePasswordRequest, SignInRequest, SignUpRequest, UserEnvelope};

// Re-export handlers
pub use change_password::change_password;
pub use sign_in::sign_in;
pub use sign_out::sign_out;
pub use sign_up::sign_up;
