/**
 * Backend Error Types
 *
 * This module defines the error kinds produced by the authentication core
 * and the treatment service. Components only ever return these values; the
 * mapping to HTTP status codes lives in `status_code` and is applied once,
 * at the response boundary.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `BadParams` - malformed or missing input on auth endpoints
 * - `BadCredentials` - sign-in failed (unknown email or wrong password, never told apart)
 * - `Unauthorized` - missing, malformed or unknown bearer token
 * - `Ownership` - authenticated, but not the owner of the record
 * - `NotFound` - no such record
 * - `Conflict` - unique field already taken
 * - `SharedError` - field validation of client payloads
 *
 * ## Server Errors
 *
 * - `Hashing`, `Token`, `Store` - infrastructure failures, reported without detail
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::tokens::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Required parameters missing, empty or inconsistent
    #[error("The provided parameters are invalid")]
    BadParams,

    /// Sign-in rejected
    #[error("The provided email and password do not match")]
    BadCredentials,

    /// Request did not carry a token that resolves to a user
    #[error("Authentication required")]
    Unauthorized,

    /// Requester does not own the record
    #[error("You do not own this resource")]
    Ownership,

    /// Record does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Kind of record that was looked up
        resource: &'static str,
    },

    /// A unique value is already in use
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Password hashing failed internally
    #[error("Hashing error: {message}")]
    Hashing {
        /// Human-readable error message
        message: String,
    },

    /// Token generation failed
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Record store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payload validation error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new not-found error for the given record kind
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new hashing error
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadParams` - 400 Bad Request
    /// - `BadCredentials`, `Unauthorized`, `Ownership` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `SharedError` - 422 Unprocessable Entity
    /// - `Hashing`, `Token`, `Store` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadParams => StatusCode::BAD_REQUEST,
            Self::BadCredentials | Self::Unauthorized | Self::Ownership => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(StoreError::Duplicate(_)) => StatusCode::CONFLICT,
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Hashing { .. } | Self::Token(_) | Self::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side failures are reported generically; their detail only goes
    /// to the log.
    pub fn message(&self) -> String {
        match self {
            Self::Hashing { .. } | Self::Token(_) => "Server error".to_string(),
            Self::Store(StoreError::Database(_)) => "Server error".to_string(),
            other => other.to_string(),
        }
    }
}
