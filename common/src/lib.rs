//! Types and logic shared by the backend service and the browser frontend:
//! the form schema model, the validation engine, and the JSON payloads
//! exchanged over `/api`.

pub mod model;
pub mod requests;
pub mod responses;
pub mod validation;
