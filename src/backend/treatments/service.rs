/**
 * Treatment Service
 *
 * CRUD over treatments for an authenticated requester. The requester id is
 * passed into every call; ownership decisions are made here and nowhere
 * else.
 *
 * - create: owner is always the requester, whatever the payload says
 * - list: filtered by owner in the store query
 * - get: any authenticated user may read a record by id
 * - update/delete: owner only, checked after the record is found
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::ownership::require_ownership;
use crate::backend::error::BackendError;
use crate::backend::store::{Store, StoreError};
use crate::shared::{SharedError, Treatment, TreatmentInput};

const RESOURCE: &str = "Treatment";

fn payload(input: Option<TreatmentInput>) -> Result<TreatmentInput, BackendError> {
    input.ok_or_else(|| SharedError::missing("treatment").into())
}

// A record deleted between our read and write is reported as missing.
fn vanished(err: StoreError) -> BackendError {
    match err {
        StoreError::NotFound => BackendError::not_found(RESOURCE),
        other => other.into(),
    }
}

/// Owner-aware access to treatment records
#[derive(Clone)]
pub struct TreatmentService {
    store: Arc<dyn Store>,
}

impl TreatmentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a treatment owned by `requester`
    pub async fn create(
        &self,
        requester: Uuid,
        input: Option<TreatmentInput>,
    ) -> Result<Treatment, BackendError> {
        let fields = payload(input)?.validate()?;
        let treatment = self.store.insert_treatment(requester, fields).await?;

        tracing::info!(id = %treatment.id, owner = %requester, "Treatment created");
        Ok(treatment)
    }

    /// All treatments owned by `requester`
    pub async fn list_mine(&self, requester: Uuid) -> Result<Vec<Treatment>, BackendError> {
        Ok(self.store.treatments_by_owner(requester).await?)
    }

    /// Fetch a single treatment by id
    pub async fn get(&self, requester: Uuid, id: Uuid) -> Result<Treatment, BackendError> {
        tracing::debug!(%id, %requester, "Fetching treatment");
        self.find(id).await
    }

    /// Merge the non-blank fields of `input` into the requester's treatment
    pub async fn update(
        &self,
        requester: Uuid,
        id: Uuid,
        input: Option<TreatmentInput>,
    ) -> Result<(), BackendError> {
        let mut treatment = self.find(id).await?;
        require_ownership(requester, treatment.owner)?;
        let patch = payload(input)?.into_patch();

        treatment.apply(patch);
        self.store
            .save_treatment(&treatment)
            .await
            .map_err(vanished)?;

        tracing::info!(%id, owner = %requester, "Treatment updated");
        Ok(())
    }

    /// Delete the requester's treatment
    pub async fn delete(&self, requester: Uuid, id: Uuid) -> Result<(), BackendError> {
        let treatment = self.find(id).await?;
        require_ownership(requester, treatment.owner)?;

        self.store
            .delete_treatment(id)
            .await
            .map_err(vanished)?;

        tracing::info!(%id, owner = %requester, "Treatment deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Treatment, BackendError> {
        self.store
            .find_treatment(id)
            .await?
            .ok_or_else(|| BackendError::not_found(RESOURCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::MemoryStore;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn service() -> TreatmentService {
        TreatmentService::new(Arc::new(MemoryStore::new()))
    }

    fn input(name: &str) -> TreatmentInput {
        TreatmentInput {
            name: Some(name.to_string()),
            tooth: Some("46".to_string()),
            radiographs: Some("bw-left.png".to_string()),
            date: Some("2024-05-20".to_string()),
            owner: None,
        }
    }

    #[tokio::test]
    async fn test_create_forces_owner() {
        let service = service();
        let requester = Uuid::new_v4();
        let mut spoofed = input("Extraction");
        spoofed.owner = Some(serde_json::json!(Uuid::new_v4().to_string()));

        let treatment = service.create(requester, Some(spoofed)).await.unwrap();
        assert_eq!(treatment.owner, requester);

        let stored = service.get(requester, treatment.id).await.unwrap();
        assert_eq!(stored.owner, requester);
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let service = service();
        let mut incomplete = input("Extraction");
        incomplete.radiographs = Some(String::new());

        assert_matches!(
            service.create(Uuid::new_v4(), Some(incomplete)).await,
            Err(BackendError::SharedError(SharedError::BlankField { field })) if field == "radiographs"
        );
        assert_matches!(
            service.create(Uuid::new_v4(), None).await,
            Err(BackendError::SharedError(_))
        );
    }

    #[tokio::test]
    async fn test_list_mine_only_returns_own_records() {
        let service = service();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        service.create(alice, Some(input("a1"))).await.unwrap();
        service.create(bob, Some(input("b1"))).await.unwrap();

        let mine = service.list_mine(alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "a1");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let service = service();
        assert_matches!(
            service.get(Uuid::new_v4(), Uuid::new_v4()).await,
            Err(BackendError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn test_get_by_other_user_is_allowed() {
        let service = service();
        let alice = Uuid::new_v4();
        let treatment = service.create(alice, Some(input("a1"))).await.unwrap();

        let seen = service.get(Uuid::new_v4(), treatment.id).await.unwrap();
        assert_eq!(seen.id, treatment.id);
    }

    #[tokio::test]
    async fn test_update_by_owner_merges_non_blank_fields() {
        let service = service();
        let alice = Uuid::new_v4();
        let treatment = service.create(alice, Some(input("Filling"))).await.unwrap();

        let patch = TreatmentInput {
            name: Some("Onlay".to_string()),
            tooth: Some(String::new()),
            owner: Some(serde_json::json!(Uuid::new_v4().to_string())),
            ..Default::default()
        };
        service.update(alice, treatment.id, Some(patch)).await.unwrap();

        let stored = service.get(alice, treatment.id).await.unwrap();
        assert_eq!(stored.name, "Onlay");
        assert_eq!(stored.tooth, "46");
        assert_eq!(stored.owner, alice);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_leaves_record() {
        let service = service();
        let alice = Uuid::new_v4();
        let treatment = service.create(alice, Some(input("Filling"))).await.unwrap();

        let result = service
            .update(Uuid::new_v4(), treatment.id, Some(input("Hijacked")))
            .await;
        assert_matches!(result, Err(BackendError::Ownership));

        let stored = service.get(alice, treatment.id).await.unwrap();
        assert_eq!(stored, treatment);
    }

    #[tokio::test]
    async fn test_update_by_non_owner_without_payload_is_ownership_error() {
        let service = service();
        let alice = Uuid::new_v4();
        let treatment = service.create(alice, Some(input("Filling"))).await.unwrap();

        assert_matches!(
            service.update(Uuid::new_v4(), treatment.id, None).await,
            Err(BackendError::Ownership)
        );
        assert_matches!(
            service.update(alice, treatment.id, None).await,
            Err(BackendError::SharedError(SharedError::MissingField { field })) if field == "treatment"
        );
    }

    #[tokio::test]
    async fn test_update_missing() {
        let service = service();
        assert_matches!(
            service
                .update(Uuid::new_v4(), Uuid::new_v4(), Some(input("x")))
                .await,
            Err(BackendError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_keeps_record() {
        let service = service();
        let alice = Uuid::new_v4();
        let treatment = service.create(alice, Some(input("Filling"))).await.unwrap();

        assert_matches!(
            service.delete(Uuid::new_v4(), treatment.id).await,
            Err(BackendError::Ownership)
        );
        assert!(service.get(alice, treatment.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let service = service();
        let alice = Uuid::new_v4();
        let treatment = service.create(alice, Some(input("Filling"))).await.unwrap();

        service.delete(alice, treatment.id).await.unwrap();
        assert_matches!(
            service.get(alice, treatment.id).await,
            Err(BackendError::NotFound { .. })
        );
        assert_matches!(
            service.delete(alice, treatment.id).await,
            Err(BackendError::NotFound { .. })
        );
    }
}
