use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use chrono::Utc;
use common::responses::HealthResponse;

use crate::state::AppState;

const API_PATH: &str = "/api/health";

/// `GET /api/health`: liveness probe with process uptime.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use common::responses::HealthResponse;

    #[actix_web::test]
    async fn reports_ok() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "ok");
        assert!(body.uptime >= 0.0);
    }
}
