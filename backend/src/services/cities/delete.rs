//! # City Removal
//!
//! Backs `DELETE /api/v1/cities/{id}`. The store reports how many rows went
//! away; zero means the id was unknown.

use super::not_found_message;
use crate::services::ApiError;
use crate::store::CityStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for `DELETE /api/v1/cities/{id}`: `204` or `404`.
pub async fn process(
    id: web::Path<i64>,
    store: web::Data<CityStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if store.delete_by_id(id).await? == 0 {
        return Err(ApiError::NotFound(not_found_message(id)));
    }
    Ok(HttpResponse::NoContent().finish())
}
