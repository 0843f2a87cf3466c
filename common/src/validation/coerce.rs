//! Helpers that interpret untyped JSON values for the validation rules.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

/// Absent, `null`, or a string that trims to nothing.
///
/// Empty arrays are not empty here; `multi-select` handles them itself.
pub(crate) fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Accepts a JSON number or a non-blank numeric string with a finite value.
///
/// `inf`, `infinity` and `NaN` spellings are not numbers here.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) if !s.trim().is_empty() => {
            s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Parses a date or date-time string into the local calendar day it denotes.
///
/// Accepted forms: `YYYY-MM-DD`, RFC 3339 (converted to local time), and naive
/// `YYYY-MM-DDTHH:MM[:SS[.f]]` / `YYYY-MM-DD HH:MM:SS`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Compiles a field pattern so it must match the whole candidate value.
pub(crate) fn anchored_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}
