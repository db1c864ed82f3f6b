//! Middleware Module
//!
//! HTTP middleware and extractor helpers for the backend server.
//!
//! - **`auth`** - bearer token resolution for protected routes
//! - **`body`** - JSON bodies that degrade to "absent" instead of rejecting

pub mod auth;
pub mod body;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use body::{envelope, JsonBody};
