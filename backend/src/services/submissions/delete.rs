use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let store = state.store.clone();
    let target = id.clone();
    web::block(move || store.delete(&target)).await??;
    info!("Deleted submission {}", id);
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::{Duration, Local};
    use common::responses::CreateSubmissionResponse;
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn deletes_then_reports_not_found() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/submissions")
            .set_json(json!({
                "fullName": "Katherine Johnson",
                "age": 50,
                "department": "Marketing",
                "dateOfJoining": (Local::now().date_naive() + Duration::days(3)).format("%Y-%m-%d").to_string(),
                "termsAccepted": true
            }))
            .to_request();
        let created: CreateSubmissionResponse = test::call_and_read_body_json(&app, req).await;

        let uri = format!("/api/submissions/{}", created.id);
        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "id": "Submission not found" }));
    }
}
