//! dentrack - Dental Treatment Tracking API
//!
//! An HTTP API where users sign up, sign in and manage the dental treatment
//! records they own.
//!
//! # Module Structure
//!
//! - **`shared`** - Types exchanged with clients
//!   - Treatment records, payloads and their validation
//!   - Validation error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and routing
//!   - bcrypt credential hashing and opaque bearer tokens
//!   - Ownership checks on treatment mutation
//!   - PostgreSQL (sqlx) or in-memory persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use dentrack::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(&ServerConfig::from_env()).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every operation returns `Result<T, BackendError>`; see
//! [`backend::error`] for the status code each kind maps to.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
