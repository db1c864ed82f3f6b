/**
 * Authentication Handler Types
 *
 * Request and response bodies for the authentication endpoints. Incoming
 * fields are all optional at the wire level; each request type has a
 * `validate` step that produces a typed value or the error the endpoint is
 * specified to return, before any hashing or storage work.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserResponse;
use crate::backend::error::BackendError;

/// Sign up request: `{"credentials": {...}}`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignUpRequest {
    #[serde(default)]
    pub credentials: Option<SignUpCredentials>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SignUpCredentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

/// Sign in request: `{"credentials": {...}}`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignInRequest {
    #[serde(default)]
    pub credentials: Option<SignInCredentials>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct SignInCredentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Change password request: `{"password": {"old": ..., "new": ...}}`
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub password: Option<PasswordChange>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct PasswordChange {
    #[serde(default)]
    pub old: Option<String>,
    #[serde(default)]
    pub new: Option<String>,
}

/// Sign-up input after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
}

/// Sign-in input after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
}

/// Response envelope for the user projection: `{"user": {...}}`
#[derive(Serialize, Debug)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl SignUpCredentials {
    /// Check credentials in order: object present, password non-empty,
    /// password equals confirmation, email non-empty
    pub fn validate(credentials: Option<Self>) -> Result<NewAccount, BackendError> {
        let credentials = credentials.ok_or(BackendError::BadParams)?;
        let password = present(credentials.password).ok_or(BackendError::BadParams)?;
        if credentials.password_confirmation.as_deref() != Some(password.as_str()) {
            return Err(BackendError::BadParams);
        }
        let email = present(credentials.email.map(|e| e.trim().to_string()))
            .ok_or(BackendError::BadParams)?;
        Ok(NewAccount { email, password })
    }
}

impl SignInCredentials {
    /// Missing pieces can never match a user, so they fail like a wrong password
    pub fn validate(credentials: Option<Self>) -> Result<LoginAttempt, BackendError> {
        let credentials = credentials.ok_or(BackendError::BadCredentials)?;
        let email = present(credentials.email.map(|e| e.trim().to_string()))
            .ok_or(BackendError::BadCredentials)?;
        let password = present(credentials.password).ok_or(BackendError::BadCredentials)?;
        Ok(LoginAttempt { email, password })
    }
}
