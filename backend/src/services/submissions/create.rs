use actix_web::{web, HttpResponse};
use common::responses::CreateSubmissionResponse;
use common::validation::{validate, RawRecord};
use log::{info, warn};
use serde_json::Value;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    // Anything but a JSON object is validated as an empty record.
    let record = match payload.into_inner() {
        Value::Object(map) => map,
        _ => RawRecord::new(),
    };

    let verdict = validate(&state.schema, &record);
    if !verdict.is_valid {
        warn!(
            "Rejected submission: {} invalid field(s)",
            verdict.errors.len()
        );
        return Ok(HttpResponse::BadRequest().json(verdict.errors));
    }

    let store = state.store.clone();
    let submission = web::block(move || store.create(record)).await??;
    info!("Stored submission {}", submission.id);

    Ok(HttpResponse::Created().json(CreateSubmissionResponse {
        success: true,
        id: submission.id,
        created_at: submission.created_at,
    }))
}
