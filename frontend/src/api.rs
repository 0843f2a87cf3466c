//! Thin `gloo-net` client for the backend's `/api` routes.

use common::model::form_schema::FormSchema;
use common::requests::ListParams;
use common::responses::{CreateSubmissionResponse, FormSchemaResponse, ListSubmissionsResponse};
use common::validation::{FieldErrors, RawRecord};
use gloo_net::http::Request;
use thiserror::Error;

const FORM_SCHEMA_PATH: &str = "/api/form-schema";
const SUBMISSIONS_PATH: &str = "/api/submissions";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("the server rejected the submission")]
    Rejected(FieldErrors),
    #[error("submission not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
}

pub async fn fetch_schema() -> Result<FormSchema, ApiError> {
    let resp = Request::get(FORM_SCHEMA_PATH).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: FormSchemaResponse = resp.json().await?;
    Ok(body.schema)
}

/// Posts `record`; a `400` comes back as [`ApiError::Rejected`] with the server's messages.
pub async fn create_submission(record: &RawRecord) -> Result<CreateSubmissionResponse, ApiError> {
    let resp = Request::post(SUBMISSIONS_PATH).json(record)?.send().await?;
    match resp.status() {
        201 => Ok(resp.json().await?),
        400 => Err(ApiError::Rejected(resp.json().await?)),
        status => Err(ApiError::Status(status)),
    }
}

pub async fn list_submissions(params: &ListParams) -> Result<ListSubmissionsResponse, ApiError> {
    let url = format!("{}?{}", SUBMISSIONS_PATH, params.to_query_string());
    let resp = Request::get(&url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn delete_submission(id: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("{}/{}", SUBMISSIONS_PATH, id))
        .send()
        .await?;
    match resp.status() {
        204 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Status(status)),
    }
}
