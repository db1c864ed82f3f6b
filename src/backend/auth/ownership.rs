//! Ownership check for user-owned records.

use uuid::Uuid;

use crate::backend::error::BackendError;

/// Allow the request only if `requester` owns the resource
///
/// Called before every update or delete of a treatment. Listing is
/// filtered by owner in the store and does not go through here.
pub fn require_ownership(requester: Uuid, owner: Uuid) -> Result<(), BackendError> {
    if requester != owner {
        tracing::warn!(%requester, %owner, "Ownership check failed");
        return Err(BackendError::Ownership);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_owner_is_authorized() {
        let id = Uuid::new_v4();
        assert!(require_ownership(id, id).is_ok());
    }

    #[test]
    fn test_other_user_is_denied() {
        assert_matches!(
            require_ownership(Uuid::new_v4(), Uuid::new_v4()),
            Err(BackendError::Ownership)
        );
    }
}
