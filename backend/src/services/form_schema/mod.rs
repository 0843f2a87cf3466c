//! # Form Schema Service
//!
//! Publishes the deployment's form so a remote renderer (the yew frontend)
//! can build the inputs and run the same validation rules before submitting.
//!
//! - `GET /api/form-schema`: `200 { "success": true, "schema": { title, fields } }`

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/form-schema";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
