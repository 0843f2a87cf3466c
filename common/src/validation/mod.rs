//! # Validation Engine
//!
//! Evaluates a raw record (an untyped JSON object) against a `FormSchema` and
//! produces a `ValidationResult`: a flag plus one human-readable message per
//! failing field. The same code runs in the browser (immediate feedback in the
//! form) and in the backend (the gate in front of the submission store), so
//! both sides always agree on what is valid and on the exact message text.
//!
//! ## Evaluation, per field and in schema order
//!
//! 1.  **Emptiness**: a value is empty if it is absent, `null`, or a string
//!     that trims to nothing.
//! 2.  **Required gate**: a required `switch` must be exactly `true`
//!     (`"<label> must be accepted."`); any other required field must not be
//!     empty (`"<label> is required."`). A failure here ends the field.
//! 3.  **Optional-empty short-circuit**: an optional empty field is valid.
//! 4.  **Variant check**: see `rules`, first failing rule wins.
//!
//! The engine is total: garbage input yields messages, never a panic. The
//! only outside dependency is the current local date, sampled once per
//! `validate` call so every `minDate: "today"` in one run sees the same day.

pub(crate) mod coerce;
mod errors;
mod rules;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::form_schema::{FieldDefinition, FieldKind, FormSchema};

pub use coerce::parse_calendar_date;
pub use errors::FieldErrors;

/// An untyped submitted record.
pub type RawRecord = Map<String, Value>;

/// The verdict of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

/// Validates `record` against `schema`, resolving `"today"` to the local calendar day.
pub fn validate(schema: &FormSchema, record: &RawRecord) -> ValidationResult {
    validate_at(schema, record, Local::now().date_naive())
}

/// Same as [`validate`] with an explicit value for `"today"`.
pub fn validate_at(schema: &FormSchema, record: &RawRecord, today: NaiveDate) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for field in schema.fields() {
        if let Some(message) = validate_one(field, record.get(&field.name), today) {
            errors.insert(&field.name, message);
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validates a single field of `record`, as the form does while the user types.
pub fn validate_field(
    schema: &FormSchema,
    record: &RawRecord,
    name: &str,
    today: NaiveDate,
) -> Option<String> {
    let field = schema.field(name)?;
    validate_one(field, record.get(name), today)
}

fn validate_one(field: &FieldDefinition, value: Option<&Value>, today: NaiveDate) -> Option<String> {
    if field.required {
        if let FieldKind::Switch = field.kind {
            if value != Some(&Value::Bool(true)) {
                return Some(format!("{} must be accepted.", field.label));
            }
        } else if coerce::is_empty(value) {
            return Some(format!("{} is required.", field.label));
        }
    }

    let value = value?;
    if coerce::is_empty(Some(value)) {
        return None;
    }

    rules::check_field(field, value, today)
}
