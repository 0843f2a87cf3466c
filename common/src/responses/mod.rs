//! JSON bodies returned by the backend under `/api`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::form_schema::FormSchema;
use crate::model::submission::Submission;

/// `GET /api/form-schema`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchemaResponse {
    pub success: bool,
    pub schema: FormSchema,
}

/// `POST /api/submissions` on success (`201 Created`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionResponse {
    pub success: bool,
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// `GET /api/submissions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSubmissionsResponse {
    pub success: bool,
    pub data: Vec<Submission>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Generic failure body (`{ "message": "..." }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

/// `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
}
