use actix_web::web::{get, resource};
use actix_web::{HttpResponse, Resource, Responder};

/// `GET /healthcheck`. Never touches the store.
pub fn configure_routes() -> Resource {
    resource("/healthcheck").route(get().to(process))
}

async fn process() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("server is up")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn healthcheck_reports_server_up() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/healthcheck").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, "server is up");
    }
}
