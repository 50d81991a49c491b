//! # City Creation
//!
//! Backs `POST /api/v1/cities`. The body is decoded into an insert payload
//! and handed to the store; the client is redirected to the new record.
//!
//! Anything that goes wrong after the body was accepted as JSON (a payload
//! that is not a city, a missing field, a failing store) is answered with
//! `500`. Only the content-type check in `JsonConfig` produces a `400`.

use super::redirect_to_city;
use crate::services::ApiError;
use crate::store::{parse_insert_payload, CityStore, StoreError};
use actix_web::{web, HttpResponse};
use serde_json::Value;

/// Actix web handler for `POST /api/v1/cities`.
///
/// The JSON body must be a city object (or an array of them). On success the
/// client is redirected (`302`) to the first created record.
///
/// # Returns
/// - `302 Found` with `Location: /api/v1/cities/{id}`.
/// - `500 Internal Server Error` when the payload cannot be inserted.
pub async fn process(
    payload: web::Json<Value>,
    store: web::Data<CityStore>,
) -> Result<HttpResponse, ApiError> {
    let id = insert_city(payload.into_inner(), &store)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(redirect_to_city(id))
}

async fn insert_city(payload: Value, store: &CityStore) -> Result<i64, StoreError> {
    let payload = parse_insert_payload(payload)?;
    let ids = store.insert(payload).await?;
    ids.first()
        .copied()
        .ok_or_else(|| StoreError::Task("no id assigned to inserted city".to_string()))
}
