//! DELETE /sign-out

use axum::{extract::State, http::StatusCode};

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Clear the requester's token; the token used for this request stops working
pub async fn sign_out(
    State(auth): State<AuthService>,
    AuthUser(requester): AuthUser,
) -> Result<StatusCode, BackendError> {
    auth.sign_out(requester.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
