/**
 * Credential Hashing
 *
 * bcrypt hashing and verification of passwords. Each hash embeds a fresh
 * random salt, so hashing the same password twice gives two different
 * digests that both verify. `bcrypt::verify` compares digests in constant
 * time.
 */

use bcrypt::{hash, verify};

use crate::backend::error::BackendError;

/// Default bcrypt work factor
pub const DEFAULT_HASH_COST: u32 = 10;

/// Lowest cost bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;

const MAX_HASH_COST: u32 = 31;

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl CredentialHasher {
    /// Create a hasher; `cost` is clamped to bcrypt's valid range (4..=31)
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_HASH_COST, MAX_HASH_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// # Errors
    ///
    /// `BackendError::Hashing` if bcrypt fails internally.
    pub fn hash(&self, plaintext: &str) -> Result<String, BackendError> {
        hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::hashing(e.to_string())
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A digest that cannot be parsed never verifies.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification error: {:?}", e);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on tokio's blocking pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, BackendError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| BackendError::hashing(format!("hashing task failed: {}", e)))?
    }

    /// [`verify`](Self::verify) on tokio's blocking pool
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        digest: String,
    ) -> Result<bool, BackendError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .map_err(|e| BackendError::hashing(format!("verification task failed: {}", e)))
    }
}
