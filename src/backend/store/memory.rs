/**
 * In-Memory Store
 *
 * Keeps users and treatments in `HashMap`s behind tokio `RwLock`s. Used when
 * no `DATABASE_URL` is configured and by the test suite. Data does not
 * survive a restart.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::{StoreError, TreatmentStore, UserStore};
use crate::shared::{Treatment, TreatmentFields};

/// Store backed by process memory
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    treatments: Arc<RwLock<HashMap<Uuid, Treatment>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == email) {
            return Err(StoreError::Duplicate("email"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            token: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_user_by_token(&self, token: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.token.as_deref() == Some(token))
            .cloned())
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn set_token(&self, id: Uuid, token: Option<&str>) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.token = token.map(str::to_string);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl TreatmentStore for MemoryStore {
    async fn insert_treatment(
        &self,
        owner: Uuid,
        fields: TreatmentFields,
    ) -> Result<Treatment, StoreError> {
        let now = Utc::now();
        let treatment = Treatment {
            id: Uuid::new_v4(),
            name: fields.name,
            tooth: fields.tooth,
            radiographs: fields.radiographs,
            date: fields.date,
            owner,
            created_at: now,
            updated_at: now,
        };
        self.treatments
            .write()
            .await
            .insert(treatment.id, treatment.clone());
        Ok(treatment)
    }

    async fn treatments_by_owner(&self, owner: Uuid) -> Result<Vec<Treatment>, StoreError> {
        let mut found: Vec<Treatment> = self
            .treatments
            .read()
            .await
            .values()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();
        found.sort_by_key(|t| t.created_at);
        Ok(found)
    }

    async fn find_treatment(&self, id: Uuid) -> Result<Option<Treatment>, StoreError> {
        Ok(self.treatments.read().await.get(&id).cloned())
    }

    async fn save_treatment(&self, treatment: &Treatment) -> Result<(), StoreError> {
        let mut treatments = self.treatments.write().await;
        let stored = treatments.get_mut(&treatment.id).ok_or(StoreError::NotFound)?;
        // owner and created_at stay as first written
        stored.name = treatment.name.clone();
        stored.tooth = treatment.tooth.clone();
        stored.radiographs = treatment.radiographs.clone();
        stored.date = treatment.date.clone();
        stored.updated_at = treatment.updated_at;
        Ok(())
    }

    async fn delete_treatment(&self, id: Uuid) -> Result<(), StoreError> {
        self.treatments
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
