//! # HTTP Services
//!
//! Wires the actix routes of the service and the extractor settings they
//! share.
//!
//! ## Sub-modules:
//! - `cities`: CRUD endpoints for the `cities` collection under `/api/v1/cities`.
//! - `health`: the `/healthcheck` liveness endpoint.
//! - `error`: `ApiError`, the mapping from failures to status codes and JSON bodies.

pub mod cities;
mod error;
mod health;

pub use error::ApiError;

use actix_web::error::JsonPayloadError;
use actix_web::web;

/// Maximum accepted JSON body size.
const JSON_LIMIT: usize = 1024 * 1024;

/// Registers every route plus the JSON, path and query extractor configuration.
/// The `CityStore` itself is expected as `web::Data` on the enclosing `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(query_config())
        .service(health::configure_routes())
        .service(cities::configure_routes());
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            let message = match err {
                JsonPayloadError::ContentType => {
                    "body must be application/json content type".to_string()
                }
                other => other.to_string(),
            };
            ApiError::BadRequest(message).into()
        })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| ApiError::BadRequest("Id must be a number".to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}
