//! # City Retrieval
//!
//! Backs `GET /api/v1/cities/{id}`. A missing city is a normal store outcome
//! (`None`) and is answered with `404`; store failures become `500`.

use super::not_found_message;
use crate::services::ApiError;
use crate::store::CityStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /api/v1/cities/{id}`.
pub async fn process(
    id: web::Path<i64>,
    store: web::Data<CityStore>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    match store.get_by_id(id).await? {
        Some(city) => Ok(HttpResponse::Ok().json(city)),
        None => Err(ApiError::NotFound(not_found_message(id))),
    }
}
