//! # City Update
//!
//! Backs `PATCH /api/v1/cities/{id}` with merge semantics: `name` and
//! `country` are written only when the body carries them.

use super::redirect_to_city;
use crate::services::ApiError;
use crate::store::CityStore;
use actix_web::{web, HttpResponse};
use common::model::city::{CityChanges, CityPatch};

/// Actix web handler for `PATCH /api/v1/cities/{id}`.
///
/// The id from the path wins over any `id` in the body. Only `name` and
/// `country` present in the body are written.
///
/// # Returns
/// - `302 Found` to the updated city.
/// - `400 Bad Request` when no city has that id.
pub async fn process(
    id: web::Path<i64>,
    changes: web::Json<CityChanges>,
    store: web::Data<CityStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let affected = store.update(CityPatch::new(id, changes.into_inner())).await?;
    if affected == 0 {
        return Err(ApiError::BadRequest("no records updated".to_string()));
    }
    Ok(redirect_to_city(id))
}
