//! Record Store Module
//!
//! This module defines the persistence seam for users and treatments.
//! Handlers and services only ever talk to the [`Store`] trait object held in
//! the application state; the concrete backend is picked at startup.
//!
//! # Backends
//!
//! - **`postgres`** - `PgStore`, sqlx over a PostgreSQL pool (production)
//! - **`memory`** - `MemoryStore`, `RwLock<HashMap>` tables (no database configured, tests)
//!
//! # Atomicity
//!
//! Each method reads or writes a single record. Both backends serialize
//! conflicting writes to the same record; nothing above this layer locks.

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::{Treatment, TreatmentFields};

/// Errors returned by store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated (e.g. email already registered)
    #[error("duplicate value for unique field '{0}'")]
    Duplicate(&'static str),

    /// The record addressed by a write no longer exists
    #[error("record not found")]
    NotFound,

    /// Underlying database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// User persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user without a token
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find the user whose current token equals `token`
    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, StoreError>;

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), StoreError>;

    /// Overwrite the stored token; `None` clears it
    async fn set_token(&self, id: Uuid, token: Option<&str>) -> Result<User, StoreError>;
}

/// Treatment persistence
#[async_trait]
pub trait TreatmentStore: Send + Sync {
    async fn insert_treatment(
        &self,
        owner: Uuid,
        fields: TreatmentFields,
    ) -> Result<Treatment, StoreError>;

    /// All treatments whose owner is `owner`, oldest first
    async fn treatments_by_owner(&self, owner: Uuid) -> Result<Vec<Treatment>, StoreError>;

    async fn find_treatment(&self, id: Uuid) -> Result<Option<Treatment>, StoreError>;

    /// Persist the mutable fields of an existing treatment
    async fn save_treatment(&self, treatment: &Treatment) -> Result<(), StoreError>;

    async fn delete_treatment(&self, id: Uuid) -> Result<(), StoreError>;
}

/// A backend providing both tables
pub trait Store: UserStore + TreatmentStore {}

impl<T: UserStore + TreatmentStore> Store for T {}
