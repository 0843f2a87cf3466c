//! Type and constraint checks, one function per field variant.
//!
//! Each check runs only after the required gate and the optional-empty
//! short-circuit, and returns the first failing rule's message.

use chrono::NaiveDate;
use serde_json::Value;

use crate::model::form_schema::{
    DateRules, FieldDefinition, FieldKind, MultiSelectRules, NumberRules, TextRules,
};

use super::coerce::{anchored_pattern, as_number, parse_calendar_date};

pub(crate) fn check_field(field: &FieldDefinition, value: &Value, today: NaiveDate) -> Option<String> {
    let label = field.label.as_str();
    match &field.kind {
        FieldKind::Text { validations } => check_text(label, validations, value, true),
        FieldKind::Textarea { validations } => check_text(label, validations, value, false),
        FieldKind::Number { validations } => check_number(label, validations, value),
        FieldKind::Select { options } => check_select(label, options, value),
        FieldKind::MultiSelect {
            options,
            validations,
        } => check_multi_select(label, field.required, options, validations, value),
        FieldKind::Date { validations } => check_date(label, validations, value, today),
        FieldKind::Switch => check_switch(label, value),
    }
}

fn check_text(label: &str, rules: &TextRules, value: &Value, use_pattern: bool) -> Option<String> {
    let Value::String(text) = value else {
        return Some(format!("{} must be a string.", label));
    };
    let length = text.chars().count();
    if let Some(min) = rules.min_length {
        if length < min {
            return Some(format!("{} must be at least {} characters long.", label, min));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Some(format!("{} must be at most {} characters long.", label, max));
        }
    }
    if use_pattern {
        if let Some(pattern) = &rules.pattern {
            let matched = anchored_pattern(pattern)
                .map(|re| re.is_match(text))
                .unwrap_or(false);
            if !matched {
                return Some(format!("{} is invalid.", label));
            }
        }
    }
    None
}

fn check_number(label: &str, rules: &NumberRules, value: &Value) -> Option<String> {
    let Some(number) = as_number(value) else {
        return Some(format!("{} must be a number.", label));
    };
    if let Some(min) = rules.min {
        if number < min {
            return Some(format!("{} must be at least {}.", label, min));
        }
    }
    if let Some(max) = rules.max {
        if number > max {
            return Some(format!("{} must be at most {}.", label, max));
        }
    }
    None
}

fn check_select(label: &str, options: &[String], value: &Value) -> Option<String> {
    let Value::String(choice) = value else {
        return Some(format!("{} must be a string.", label));
    };
    if !options.contains(choice) {
        return Some(format!("{} must be one of: {}.", label, options.join(", ")));
    }
    None
}

fn check_multi_select(
    label: &str,
    required: bool,
    options: &[String],
    rules: &MultiSelectRules,
    value: &Value,
) -> Option<String> {
    let Value::Array(items) = value else {
        return Some(format!("{} must be an array.", label));
    };
    let mut selected = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => selected.push(s),
            _ => return Some(format!("{} must contain only strings.", label)),
        }
    }
    if !selected.iter().all(|s| options.contains(s)) {
        return Some(format!("{} contains invalid selection(s).", label));
    }
    // An empty selection counts as an empty value: optional passes, required
    // reports "is required." before any minSelected bound.
    if selected.is_empty() {
        return required.then(|| format!("{} is required.", label));
    }
    if let Some(min) = rules.min_selected {
        if selected.len() < min {
            return Some(format!("{} must have at least {} selection(s).", label, min));
        }
    }
    if let Some(max) = rules.max_selected {
        if selected.len() > max {
            return Some(format!("{} must have at most {} selection(s).", label, max));
        }
    }
    None
}

fn check_date(label: &str, rules: &DateRules, value: &Value, today: NaiveDate) -> Option<String> {
    let Value::String(raw) = value else {
        return Some(format!("{} must be a date string.", label));
    };
    let Some(date) = parse_calendar_date(raw) else {
        return Some(format!("{} must be a valid date.", label));
    };
    let bound = rules.min_date.as_ref().and_then(|min| min.resolve(today));
    if let Some(bound) = bound {
        if date < bound {
            return Some(format!(
                "{} cannot be earlier than {}.",
                label,
                bound.format("%Y-%m-%d")
            ));
        }
    }
    None
}

fn check_switch(label: &str, value: &Value) -> Option<String> {
    match value {
        Value::Bool(_) => None,
        _ => Some(format!("{} must be a boolean.", label)),
    }
}
