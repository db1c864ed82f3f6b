//! Treatment HTTP Handlers
//!
//! All routes here sit behind `auth_middleware`; the requester comes from
//! the `AuthUser` extractor.
//!
//! - POST   /treatments       - 201 `{"treatment": ...}`
//! - GET    /treatments       - 200 `{"allTreatments": [...]}`
//! - GET    /treatments/{id}  - 200 `{"treatment": ...}`
//! - PATCH  /treatments/{id}  - 204
//! - DELETE /treatments/{id}  - 204

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::{envelope, AuthUser, JsonBody};
use crate::backend::treatments::service::TreatmentService;
use crate::shared::{Treatment, TreatmentInput};

/// Request body: `{"treatment": {...}}`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TreatmentRequest {
    #[serde(default)]
    pub treatment: Option<TreatmentInput>,
}

/// Single treatment response
#[derive(Debug, Serialize)]
pub struct TreatmentEnvelope {
    pub treatment: Treatment,
}

/// Treatment list response
#[derive(Debug, Serialize)]
pub struct TreatmentList {
    #[serde(rename = "allTreatments")]
    pub all_treatments: Vec<Treatment>,
}

/// Ids that do not parse cannot name an existing record
fn treatment_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found("Treatment"))
}

pub async fn create_treatment(
    State(treatments): State<TreatmentService>,
    AuthUser(requester): AuthUser,
    body: JsonBody<TreatmentRequest>,
) -> Result<(StatusCode, Json<TreatmentEnvelope>), BackendError> {
    let input = envelope(body, |request| request.treatment);
    let treatment = treatments.create(requester.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(TreatmentEnvelope { treatment })))
}

pub async fn list_treatments(
    State(treatments): State<TreatmentService>,
    AuthUser(requester): AuthUser,
) -> Result<Json<TreatmentList>, BackendError> {
    let all_treatments = treatments.list_mine(requester.user_id).await?;
    Ok(Json(TreatmentList { all_treatments }))
}

pub async fn get_treatment(
    State(treatments): State<TreatmentService>,
    AuthUser(requester): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<TreatmentEnvelope>, BackendError> {
    let treatment = treatments
        .get(requester.user_id, treatment_id(&id)?)
        .await?;
    Ok(Json(TreatmentEnvelope { treatment }))
}

pub async fn update_treatment(
    State(treatments): State<TreatmentService>,
    AuthUser(requester): AuthUser,
    Path(id): Path<String>,
    body: JsonBody<TreatmentRequest>,
) -> Result<StatusCode, BackendError> {
    let input = envelope(body, |request| request.treatment);
    treatments
        .update(requester.user_id, treatment_id(&id)?, input)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_treatment(
    State(treatments): State<TreatmentService>,
    AuthUser(requester): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    treatments
        .delete(requester.user_id, treatment_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
