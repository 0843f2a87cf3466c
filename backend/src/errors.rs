//! HTTP-facing error type.
//!
//! Validation failures never reach this type: they are an expected outcome and
//! `submissions::create` answers them directly with the error map. What is
//! left is "not found" for deletes and unexpected server faults.

use actix_web::error::{BlockingError, InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::responses::ErrorMessage;
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("submission not found")]
    NotFound,
    #[error(transparent)]
    Store(StoreError),
    #[error("blocking task failed: {0}")]
    Blocking(#[from] BlockingError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Store(other),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound => {
                HttpResponse::NotFound().json(json!({ "id": "Submission not found" }))
            }
            other => {
                error!("Request failed: {}", other);
                HttpResponse::InternalServerError().json(ErrorMessage {
                    message: "Internal server error".to_string(),
                })
            }
        }
    }
}

/// Turns malformed or oversized JSON bodies into `400 { "message": ... }`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorMessage {
        message: err.to_string(),
    };
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
