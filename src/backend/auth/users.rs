/**
 * User Model
 *
 * This module defines the stored user record and its public projection.
 * The stored record carries the bcrypt hash and the current bearer token;
 * the projection is the only form that ever leaves the backend.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Current bearer token; `None` when signed out or never signed in
    pub token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// User response (without sensitive data)
///
/// Never includes the password hash. `token` is only populated in the
/// sign-in response, where handing it to the client is the point.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public projection without the token
    pub fn public(&self) -> UserResponse {
        UserResponse {
            id: self.id.to_string(),
            email: self.email.clone(),
            token: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Public projection including the current token
    pub fn public_with_token(&self) -> UserResponse {
        UserResponse {
            token: self.token.clone(),
            ..self.public()
        }
    }
}
