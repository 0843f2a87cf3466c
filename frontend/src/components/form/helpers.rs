//! Conversions between form controls and raw record values.
//!
//! Controls always report strings. The record keeps what the engine and the
//! backend expect: numbers as JSON numbers when they parse, selections as
//! arrays of strings, switches as booleans.

use common::model::form_schema::{FieldKind, FormSchema};
use common::validation::RawRecord;
use serde_json::{Number, Value};

/// Initial values: required selects start on their first option, multi-selects
/// on an empty array and switches on `false`. Everything else starts absent.
pub fn default_values(schema: &FormSchema) -> RawRecord {
    let mut values = RawRecord::new();
    for field in schema.fields() {
        let initial = match &field.kind {
            FieldKind::Select { options } if field.required => {
                options.first().map(|o| Value::String(o.clone()))
            }
            FieldKind::MultiSelect { .. } => Some(Value::Array(Vec::new())),
            FieldKind::Switch => Some(Value::Bool(false)),
            _ => None,
        };
        if let Some(value) = initial {
            values.insert(field.name.clone(), value);
        }
    }
    values
}

/// Value of a number input. Unparseable text is kept as a string so the
/// engine can report it.
pub fn number_value(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(number) => Some(Value::Number(normalize(number))),
        None => Some(Value::String(raw.to_string())),
    }
}

/// `18.0` is posted as `18`.
fn normalize(number: Number) -> Number {
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Number::from(f as i64),
        _ => number,
    }
}

/// Value of a text-like input; an empty control clears the field.
pub fn text_value(raw: String) -> Option<Value> {
    if raw.is_empty() {
        None
    } else {
        Some(Value::String(raw))
    }
}

/// Adds `option` to the array in `current`, or removes it when already present.
/// Keeps the order of `options` so the posted array is stable.
pub fn toggle_option(current: Option<&Value>, option: &str, options: &[String]) -> Value {
    let mut selected: Vec<String> = current
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    if let Some(index) = selected.iter().position(|s| s == option) {
        selected.remove(index);
    } else {
        selected.push(option.to_string());
    }
    selected.sort_by_key(|s| options.iter().position(|o| o == s).unwrap_or(usize::MAX));

    Value::Array(selected.into_iter().map(Value::String).collect())
}

/// String shown by a text-like control for `value`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::form_schema::{FieldDefinition, MultiSelectRules};
    use serde_json::json;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn defaults_follow_field_kinds() {
        let schema = FormSchema::new(
            "Defaults",
            vec![
                FieldDefinition::new(
                    "dept",
                    "Dept",
                    FieldKind::Select { options: options(&["HR", "Ops"]) },
                )
                .required(),
                FieldDefinition::new(
                    "shift",
                    "Shift",
                    FieldKind::Select { options: options(&["Day", "Night"]) },
                ),
                FieldDefinition::new(
                    "tags",
                    "Tags",
                    FieldKind::MultiSelect {
                        options: options(&["a", "b"]),
                        validations: MultiSelectRules::default(),
                    },
                ),
                FieldDefinition::new("ok", "Ok", FieldKind::Switch),
            ],
        )
        .unwrap();

        let values = default_values(&schema);
        assert_eq!(values.get("dept"), Some(&json!("HR")));
        assert_eq!(values.get("shift"), None);
        assert_eq!(values.get("tags"), Some(&json!([])));
        assert_eq!(values.get("ok"), Some(&json!(false)));
    }

    #[test]
    fn number_input_conversion() {
        assert_eq!(number_value(" 36 "), Some(json!(36)));
        assert_eq!(number_value("2.5"), Some(json!(2.5)));
        assert_eq!(number_value("abc"), Some(json!("abc")));
        assert_eq!(number_value("   "), None);
    }

    #[test]
    fn toggling_keeps_option_order() {
        let opts = options(&["React", "Node", "Python"]);
        let picked = toggle_option(Some(&json!(["Python"])), "React", &opts);
        assert_eq!(picked, json!(["React", "Python"]));
        let dropped = toggle_option(Some(&picked), "Python", &opts);
        assert_eq!(dropped, json!(["React"]));
        assert_eq!(toggle_option(None, "Node", &opts), json!(["Node"]));
    }

    #[test]
    fn display_of_stored_values() {
        assert_eq!(display_value(Some(&json!("x"))), "x");
        assert_eq!(display_value(Some(&json!(18))), "18");
        assert_eq!(display_value(None), "");
    }
}
