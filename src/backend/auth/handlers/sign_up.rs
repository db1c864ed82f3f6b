/**
 * Sign Up Handler
 *
 * POST /sign-up
 *
 * # Registration Process
 *
 * 1. Validate credentials (present, non-empty password, matching confirmation, email)
 * 2. Hash password using bcrypt
 * 3. Create user without a token
 * 4. Return the public projection with 201 Created
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{SignUpRequest, UserEnvelope};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::{envelope, JsonBody};

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - credentials missing or unreadable, password empty or not confirmed
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /sign-up HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "credentials": {
///     "email": "a@x.com",
///     "password": "secret",
///     "password_confirmation": "secret"
///   }
/// }
/// ```
pub async fn sign_up(
    State(auth): State<AuthService>,
    body: JsonBody<SignUpRequest>,
) -> Result<(StatusCode, Json<UserEnvelope>), BackendError> {
    let user = auth
        .sign_up(envelope(body, |request| request.credentials))
        .await?;
    Ok((StatusCode::CREATED, Json(UserEnvelope { user })))
}
