//! Backend Error Module
//!
//! This module defines the error type returned by every backend operation
//! and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status code mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Services return `Result<T, BackendError>`; no service picks a status code
//! itself. Handlers propagate with `?` and the `IntoResponse` impl turns the
//! error into `{"error": ..., "status": ...}` with the mapped status.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
