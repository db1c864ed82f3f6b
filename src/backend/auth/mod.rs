//! Authentication Module
//!
//! This module handles user registration, sign-in, password changes and
//! sign-out, plus the building blocks they share.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt credential hashing and verification
//! - **`tokens`** - opaque bearer token issuance
//! - **`ownership`** - requester-owns-record check
//! - **`users`** - User record and its public projection
//! - **`service`** - AuthService orchestrating the flows
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Sign up**: credentials validated → password hashed → user stored without token
//! 2. **Sign in**: password verified → new token stored on the user → token returned
//! 3. **Authenticated request**: `Authorization: Bearer <token>` → middleware finds the user holding it
//! 4. **Sign out**: token cleared → old token no longer resolves
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10 by default) and never returned
//! - Tokens carry 128 random bits and have no expiry; rotation is the only invalidation
//! - Sign-in and password change never reveal which check failed

/// Credential hashing
pub mod password;

/// Bearer token issuance
pub mod tokens;

/// Ownership guard
pub mod ownership;

/// User data model
pub mod users;

/// Authentication flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{change_password, sign_in, sign_out, sign_up};
pub use ownership::require_ownership;
pub use password::CredentialHasher;
pub use service::AuthService;
pub use users::{User, UserResponse};
