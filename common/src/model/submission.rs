use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored, previously validated form fill-in.
///
/// Created exactly once by a submission store, never mutated, and removed only
/// by an explicit delete by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// UUID v4 assigned at creation.
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// The record exactly as it was submitted.
    pub data: Map<String, Value>,
}
