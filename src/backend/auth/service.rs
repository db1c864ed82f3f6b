/**
 * Authentication Service
 *
 * Sign-up, sign-in, password change, sign-out and token resolution on top
 * of the credential hasher, the token issuer and the record store.
 *
 * # Ordering
 *
 * Each flow runs its steps strictly in order and returns on the first
 * failure, so a rejected request never reaches a later hash or write.
 * Input validation always precedes hashing.
 *
 * # Token lifecycle
 *
 * - sign-in writes a freshly issued token over whatever was stored
 * - sign-out clears the stored token
 * - a bearer token is valid while some user's stored token equals it
 *
 * Sign-in for an unknown email still runs one bcrypt verification, against
 * a placeholder digest, so both failure paths cost the same.
 */

use std::sync::Arc;

use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::backend::auth::handlers::types::{
    PasswordChange, SignInCredentials, SignUpCredentials,
};
use crate::backend::auth::password::CredentialHasher;
use crate::backend::auth::tokens::issue_token;
use crate::backend::auth::users::{User, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::store::{Store, StoreError};

/// Orchestrates the authentication flows
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    hasher: CredentialHasher,
    placeholder_digest: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, hasher: CredentialHasher) -> Self {
        Self {
            store,
            hasher,
            placeholder_digest: Arc::new(OnceCell::new()),
        }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `BadParams` - credentials missing, empty password, confirmation mismatch, empty email
    /// * `Conflict` - email already registered
    pub async fn sign_up(
        &self,
        credentials: Option<SignUpCredentials>,
    ) -> Result<UserResponse, BackendError> {
        let account = SignUpCredentials::validate(credentials)
            .inspect_err(|_| tracing::warn!("Rejected sign-up parameters"))?;

        let password_hash = self.hasher.hash_blocking(account.password).await?;

        let user = self
            .store
            .create_user(&account.email, &password_hash)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => {
                    tracing::warn!("Email already registered: {}", account.email);
                    BackendError::conflict("Email already registered")
                }
                other => other.into(),
            })?;

        tracing::info!("User created successfully: {} ({})", user.email, user.id);
        Ok(user.public())
    }

    /// Authenticate with email and password and rotate the user's token
    ///
    /// # Errors
    ///
    /// * `BadCredentials` - unknown email or wrong password (indistinguishable)
    pub async fn sign_in(
        &self,
        credentials: Option<SignInCredentials>,
    ) -> Result<UserResponse, BackendError> {
        let attempt = SignInCredentials::validate(credentials)?;

        let Some(user) = self.store.find_user_by_email(&attempt.email).await? else {
            self.burn_verification(attempt.password).await?;
            tracing::warn!("Sign-in for unknown email");
            return Err(BackendError::BadCredentials);
        };

        let valid = self
            .hasher
            .verify_blocking(attempt.password, user.password_hash.clone())
            .await?;
        if !valid {
            tracing::warn!("Invalid password for user: {}", user.id);
            return Err(BackendError::BadCredentials);
        }

        let token = issue_token()?;
        let user = self.store.set_token(user.id, Some(&token)).await?;

        tracing::info!("User signed in successfully: {} ({})", user.email, user.id);
        Ok(user.public_with_token())
    }

    /// Replace the requester's password
    ///
    /// # Errors
    ///
    /// * `BadParams` - new password missing/empty or old password wrong (indistinguishable)
    /// * `Unauthorized` - the requester no longer exists
    pub async fn change_password(
        &self,
        requester: Uuid,
        passwords: Option<PasswordChange>,
    ) -> Result<(), BackendError> {
        let passwords = passwords.ok_or(BackendError::BadParams)?;
        let user = self.user(requester).await?;

        let old_matches = match passwords.old {
            Some(old) => {
                self.hasher
                    .verify_blocking(old, user.password_hash.clone())
                    .await?
            }
            None => false,
        };

        let new = match passwords.new {
            Some(new) if !new.is_empty() && old_matches => new,
            _ => {
                tracing::warn!("Rejected password change for user: {}", user.id);
                return Err(BackendError::BadParams);
            }
        };

        let password_hash = self.hasher.hash_blocking(new).await?;
        self.store.set_password_hash(user.id, &password_hash).await?;

        tracing::info!("Password changed for user: {}", user.id);
        Ok(())
    }

    /// Clear the requester's token
    pub async fn sign_out(&self, requester: Uuid) -> Result<(), BackendError> {
        self.store
            .set_token(requester, None)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => BackendError::Unauthorized,
                other => other.into(),
            })?;

        tracing::info!("User signed out: {}", requester);
        Ok(())
    }

    /// Map a bearer token to the user currently holding it
    ///
    /// # Errors
    ///
    /// * `Unauthorized` - empty token or no user holds it
    pub async fn resolve_token(&self, token: &str) -> Result<User, BackendError> {
        if token.is_empty() {
            return Err(BackendError::Unauthorized);
        }
        self.store
            .find_user_by_token(token)
            .await?
            .ok_or(BackendError::Unauthorized)
    }

    /// Verify against a placeholder digest hashed at the configured cost
    async fn burn_verification(&self, password: String) -> Result<(), BackendError> {
        let digest = self
            .placeholder_digest
            .get_or_try_init(|| self.hasher.hash_blocking("placeholder".to_string()))
            .await?;
        self.hasher.verify_blocking(password, digest.clone()).await?;
        Ok(())
    }

    async fn user(&self, id: Uuid) -> Result<User, BackendError> {
        self.store
            .find_user_by_id(id)
            .await?
            .ok_or(BackendError::Unauthorized)
    }
}
