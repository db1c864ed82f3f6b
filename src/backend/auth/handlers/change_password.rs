//! PATCH /change-password

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::handlers::types::ChangePasswordRequest;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::{envelope, AuthUser, JsonBody};

/// Change the requester's password; 204 on success, 400 otherwise
pub async fn change_password(
    State(auth): State<AuthService>,
    AuthUser(requester): AuthUser,
    body: JsonBody<ChangePasswordRequest>,
) -> Result<StatusCode, BackendError> {
    let passwords = envelope(body, |request| request.password);
    auth.change_password(requester.user_id, passwords).await?;
    Ok(StatusCode::NO_CONTENT)
}
