//! Shared Module
//!
//! Types exchanged with clients: treatment records and payloads, and the
//! validation errors raised while checking them.

/// Treatment data structures
pub mod treatment;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use treatment::{Treatment, TreatmentFields, TreatmentInput, TreatmentPatch};
