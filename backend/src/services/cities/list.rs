//! # City Listing
//!
//! Backs `GET /api/v1/cities`, one page of cities in insertion order.

use crate::services::ApiError;
use crate::store::CityStore;
use actix_web::{web, HttpResponse};
use common::requests::ListCitiesQuery;

/// Actix web handler for `GET /api/v1/cities`.
///
/// `limit` and `offset` are validated before the store is touched; absent
/// values fall through to the store's paging defaults.
///
/// # Returns
/// - `200 OK` with a JSON array of cities.
/// - `400 Bad Request` when a parameter is not a number or is negative.
/// - `500 Internal Server Error` when the store fails.
pub async fn process(
    query: web::Query<ListCitiesQuery>,
    store: web::Data<CityStore>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let limit = parse_page_param("Limit", query.limit.as_deref())?;
    let offset = parse_page_param("Offset", query.offset.as_deref())?;

    let cities = store.list(limit, offset).await?;
    Ok(HttpResponse::Ok().json(cities))
}

fn parse_page_param(label: &str, raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    let value: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{label} must be a number")))?;
    if value < 0 {
        return Err(ApiError::BadRequest(format!(
            "{label} must be a positive number"
        )));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::parse_page_param;

    #[test]
    fn blank_parameters_are_absent() {
        assert_eq!(parse_page_param("Limit", None).unwrap(), None);
        assert_eq!(parse_page_param("Limit", Some("")).unwrap(), None);
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(parse_page_param("Offset", Some("0")).unwrap(), Some(0));
    }
}
