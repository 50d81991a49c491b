//! # City Service Module
//!
//! HTTP surface of the `cities` collection. Each handler validates its input,
//! calls the `CityStore` and maps the outcome to a status code.
//!
//! ## Sub-modules:
//! - `list`: paged listing with `limit`/`offset` validation.
//! - `create`: insertion, answered with a redirect to the new record.
//! - `get`: single record lookup.
//! - `update`: merge-update of `name`/`country`.
//! - `delete`: removal by id.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::http::header;
use actix_web::web::{delete, get, patch, post, scope};
use actix_web::{HttpResponse, Scope};

/// The base path for all city endpoints.
pub const API_PATH: &str = "/api/v1/cities";

/// Configures and returns the Actix `Scope` for the city routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, one page of cities as a JSON array.
/// *   **`POST /`**: `create::process`, inserts and redirects (`302`) to the new city.
/// *   **`GET /{id}`**: `get::process`, the city or `404`.
/// *   **`PATCH /{id}`**: `update::process`, merge-update then redirect, `400` when nothing changed.
/// *   **`DELETE /{id}`**: `delete::process`, `204` or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// `302 Found` pointing at the canonical URL of a city.
fn redirect_to_city(id: i64) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("{API_PATH}/{id}")))
        .finish()
}

fn not_found_message(id: i64) -> String {
    format!("could not find city with id {id}")
}
