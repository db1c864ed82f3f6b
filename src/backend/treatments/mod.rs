//! Treatments Module
//!
//! Owned treatment records: the service applying ownership rules and the
//! HTTP handlers exposing it.

/// Ownership-aware CRUD
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    create_treatment, delete_treatment, get_treatment, list_treatments, update_treatment,
};
pub use service::TreatmentService;
