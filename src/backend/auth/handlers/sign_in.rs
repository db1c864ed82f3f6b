/**
 * Sign In Handler
 *
 * POST /sign-in
 *
 * Verifies email and password, issues a new bearer token (replacing any
 * previous one) and returns the user projection including that token.
 * Unknown email, wrong password and an unreadable body all produce the
 * same 401 response.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{SignInRequest, UserEnvelope};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::{envelope, JsonBody};

/// Sign in handler
///
/// # Example Response
///
/// ```json
/// {
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "email": "a@x.com",
///     "token": "3f7a0c2d9e8b41a6b5c4d3e2f1a09876",
///     "created_at": "2024-01-01T00:00:00Z",
///     "updated_at": "2024-01-01T00:00:00Z"
///   }
/// }
/// ```
pub async fn sign_in(
    State(auth): State<AuthService>,
    body: JsonBody<SignInRequest>,
) -> Result<(StatusCode, Json<UserEnvelope>), BackendError> {
    let user = auth
        .sign_in(envelope(body, |request| request.credentials))
        .await?;
    Ok((StatusCode::CREATED, Json(UserEnvelope { user })))
}
