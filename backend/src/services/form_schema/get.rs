use actix_web::{web, HttpResponse, Responder};
use common::responses::FormSchemaResponse;

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FormSchemaResponse {
        success: true,
        schema: state.schema.as_ref().clone(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::Value;

    #[actix_web::test]
    async fn serves_the_schema_document() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/api/form-schema").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["schema"]["title"], "Employee Onboarding");
        let fields = body["schema"]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[3]["type"], "multi-select");
        assert_eq!(fields[3]["options"][0], "React");
    }
}
