/**
 * Request Body Extraction
 *
 * Every endpoint body is an envelope (`{"credentials": ...}`,
 * `{"treatment": ...}`). A body that is missing, not JSON or the wrong
 * shape is handed on as an absent envelope, so the service's own
 * "envelope present" check decides the error and the response keeps the
 * `{"error", "status"}` format.
 */

use axum::extract::rejection::JsonRejection;
use axum::Json;

/// Handler argument for a JSON body whose rejection is handled in-band
pub type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// Unwrap the envelope's inner value, or `None` when the body was rejected
pub fn envelope<T, U>(body: JsonBody<T>, inner: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match body {
        Ok(Json(request)) => inner(request),
        Err(rejection) => {
            tracing::warn!("Unusable request body: {}", rejection);
            None
        }
    }
}
