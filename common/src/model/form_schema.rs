//! Declarative description of a dynamic form.
//!
//! A `FormSchema` is an ordered list of `FieldDefinition`s. Every definition
//! carries the attributes shared by all inputs (`name`, `label`, `required`)
//! plus a `FieldKind`, the closed set of seven input variants with their own
//! constraint data. The JSON shape is the one served by
//! `GET /api/form-schema` and consumed by the frontend:
//!
//! ```json
//! { "name": "age", "label": "Age", "type": "number", "required": true,
//!   "validations": { "min": 18, "max": 65 } }
//! ```
//!
//! Schemas are immutable once built. Both `FormSchema::new` and JSON
//! deserialization run the same structural checks, so the validation engine
//! can assume a well-formed schema.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::coerce::{anchored_pattern, parse_calendar_date};

/// Structural problems detected while building a `FormSchema`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field name '{0}' is declared more than once")]
    DuplicateField(String),
    #[error("field '{0}' must declare at least one option")]
    EmptyOptions(String),
    #[error("field '{field}' declares option '{option}' more than once")]
    DuplicateOption { field: String, option: String },
    #[error("field '{field}' has an invalid pattern: {reason}")]
    InvalidPattern { field: String, reason: String },
    #[error("field '{field}' has an unparseable minDate '{value}'")]
    InvalidMinDate { field: String, value: String },
    #[error("field '{field}' has {lower} greater than {upper}")]
    InvertedBounds {
        field: String,
        lower: &'static str,
        upper: &'static str,
    },
}

/// One named input of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Key of the value inside a submitted record. Unique within a schema.
    pub name: String,
    /// Display text, also interpolated into every error message.
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            kind,
        }
    }

    /// Marks the field as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn check(&self) -> Result<(), SchemaError> {
        match &self.kind {
            FieldKind::Text { validations } | FieldKind::Textarea { validations } => {
                if let (Some(min), Some(max)) = (validations.min_length, validations.max_length) {
                    if min > max {
                        return Err(self.inverted("minLength", "maxLength"));
                    }
                }
                if let Some(pattern) = &validations.pattern {
                    anchored_pattern(pattern).map_err(|e| SchemaError::InvalidPattern {
                        field: self.name.clone(),
                        reason: e.to_string(),
                    })?;
                }
            }
            FieldKind::Number { validations } => {
                if let (Some(min), Some(max)) = (validations.min, validations.max) {
                    if min > max {
                        return Err(self.inverted("min", "max"));
                    }
                }
            }
            FieldKind::Select { options } => self.check_options(options)?,
            FieldKind::MultiSelect {
                options,
                validations,
            } => {
                self.check_options(options)?;
                if let (Some(min), Some(max)) = (validations.min_selected, validations.max_selected)
                {
                    if min > max {
                        return Err(self.inverted("minSelected", "maxSelected"));
                    }
                }
            }
            FieldKind::Date { validations } => {
                if let Some(MinDate::Fixed(raw)) = &validations.min_date {
                    if parse_calendar_date(raw).is_none() {
                        return Err(SchemaError::InvalidMinDate {
                            field: self.name.clone(),
                            value: raw.clone(),
                        });
                    }
                }
            }
            FieldKind::Switch => {}
        }
        Ok(())
    }

    fn check_options(&self, options: &[String]) -> Result<(), SchemaError> {
        if options.is_empty() {
            return Err(SchemaError::EmptyOptions(self.name.clone()));
        }
        let mut seen = HashSet::with_capacity(options.len());
        for option in options {
            if !seen.insert(option.as_str()) {
                return Err(SchemaError::DuplicateOption {
                    field: self.name.clone(),
                    option: option.clone(),
                });
            }
        }
        Ok(())
    }

    fn inverted(&self, lower: &'static str, upper: &'static str) -> SchemaError {
        SchemaError::InvertedBounds {
            field: self.name.clone(),
            lower,
            upper,
        }
    }
}

/// The seven supported input variants, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    Text {
        #[serde(default)]
        validations: TextRules,
    },
    Number {
        #[serde(default)]
        validations: NumberRules,
    },
    Select {
        options: Vec<String>,
    },
    MultiSelect {
        options: Vec<String>,
        #[serde(default)]
        validations: MultiSelectRules,
    },
    Date {
        #[serde(default)]
        validations: DateRules,
    },
    Textarea {
        #[serde(default)]
        validations: TextRules,
    },
    Switch,
}

impl FieldKind {
    /// The `type` discriminant as it appears in JSON.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Select { .. } => "select",
            FieldKind::MultiSelect { .. } => "multi-select",
            FieldKind::Date { .. } => "date",
            FieldKind::Textarea { .. } => "textarea",
            FieldKind::Switch => "switch",
        }
    }

    /// Declared options for `select` and `multi-select`, empty otherwise.
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Select { options } | FieldKind::MultiSelect { options, .. } => options,
            _ => &[],
        }
    }
}

/// Constraints shared by `text` and `textarea`. `pattern` is only enforced for `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selected: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<MinDate>,
}

/// Lower bound of a `date` field: the literal `"today"` or a fixed date string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MinDate {
    Today,
    Fixed(String),
}

impl MinDate {
    /// Resolves the bound to a calendar day. `today` is supplied by the caller so
    /// every date field of one validation run sees the same day.
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            MinDate::Today => Some(today),
            MinDate::Fixed(raw) => parse_calendar_date(raw),
        }
    }
}

impl From<String> for MinDate {
    fn from(value: String) -> Self {
        if value == "today" {
            MinDate::Today
        } else {
            MinDate::Fixed(value)
        }
    }
}

impl From<MinDate> for String {
    fn from(value: MinDate) -> Self {
        match value {
            MinDate::Today => "today".to_string(),
            MinDate::Fixed(raw) => raw,
        }
    }
}

/// A complete form: display title plus fields in rendering order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedFormSchema")]
pub struct FormSchema {
    title: String,
    fields: Vec<FieldDefinition>,
}

#[derive(Deserialize)]
struct UncheckedFormSchema {
    title: String,
    fields: Vec<FieldDefinition>,
}

impl TryFrom<UncheckedFormSchema> for FormSchema {
    type Error = SchemaError;

    fn try_from(raw: UncheckedFormSchema) -> Result<Self, Self::Error> {
        FormSchema::new(raw.title, raw.fields)
    }
}

impl FormSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FieldDefinition>) -> Result<Self, SchemaError> {
        let mut names = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            field.check()?;
        }
        Ok(Self {
            title: title.into(),
            fields,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Looks a field up by its `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_every_variant() {
        let schema: FormSchema = serde_json::from_value(json!({
            "title": "All kinds",
            "fields": [
                { "name": "a", "label": "A", "type": "text", "required": true,
                  "validations": { "minLength": 2, "pattern": "^[a-z]*$" } },
                { "name": "b", "label": "B", "type": "number", "validations": { "min": 1.5 } },
                { "name": "c", "label": "C", "type": "select", "options": ["x", "y"] },
                { "name": "d", "label": "D", "type": "multi-select", "options": ["x"],
                  "validations": { "maxSelected": 1 } },
                { "name": "e", "label": "E", "type": "date", "validations": { "minDate": "today" } },
                { "name": "f", "label": "F", "type": "textarea" },
                { "name": "g", "label": "G", "type": "switch", "required": true }
            ]
        }))
        .unwrap();

        let kinds: Vec<_> = schema.fields().iter().map(|f| f.kind.type_name()).collect();
        assert_eq!(
            kinds,
            ["text", "number", "select", "multi-select", "date", "textarea", "switch"]
        );
        assert!(schema.field("a").unwrap().required);
        assert!(!schema.field("b").unwrap().required);
        assert_eq!(
            schema.field("e").unwrap().kind,
            FieldKind::Date {
                validations: DateRules {
                    min_date: Some(MinDate::Today)
                }
            }
        );
        assert_eq!(schema.field("c").unwrap().kind.options(), ["x", "y"]);
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn serializes_with_type_tag_and_camel_case_rules() {
        let field = FieldDefinition::new(
            "skills",
            "Skills",
            FieldKind::MultiSelect {
                options: vec!["React".into()],
                validations: MultiSelectRules {
                    min_selected: Some(1),
                    max_selected: None,
                },
            },
        );
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "skills",
                "label": "Skills",
                "required": false,
                "type": "multi-select",
                "options": ["React"],
                "validations": { "minSelected": 1 }
            })
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let text = || FieldKind::Text {
            validations: TextRules::default(),
        };
        let err = FormSchema::new(
            "dup",
            vec![
                FieldDefinition::new("x", "X", text()),
                FieldDefinition::new("x", "Other X", text()),
            ],
        )
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField("x".into()));
    }

    #[test]
    fn rejects_empty_and_duplicate_options() {
        let empty = FieldDefinition::new("s", "S", FieldKind::Select { options: vec![] });
        assert_eq!(
            FormSchema::new("t", vec![empty]).unwrap_err(),
            SchemaError::EmptyOptions("s".into())
        );

        let dup = FieldDefinition::new(
            "s",
            "S",
            FieldKind::Select {
                options: vec!["a".into(), "a".into()],
            },
        );
        assert!(matches!(
            FormSchema::new("t", vec![dup]),
            Err(SchemaError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn rejects_bad_pattern_min_date_and_inverted_bounds() {
        let bad_pattern: Result<FormSchema, _> = serde_json::from_value(json!({
            "title": "t",
            "fields": [{ "name": "a", "label": "A", "type": "text",
                         "validations": { "pattern": "([a-z" } }]
        }));
        assert!(bad_pattern.is_err());

        let bad_date = FieldDefinition::new(
            "d",
            "D",
            FieldKind::Date {
                validations: DateRules {
                    min_date: Some(MinDate::Fixed("not a date".into())),
                },
            },
        );
        assert!(matches!(
            FormSchema::new("t", vec![bad_date]),
            Err(SchemaError::InvalidMinDate { .. })
        ));

        let inverted = FieldDefinition::new(
            "n",
            "N",
            FieldKind::Number {
                validations: NumberRules {
                    min: Some(10.0),
                    max: Some(1.0),
                },
            },
        );
        assert_eq!(
            FormSchema::new("t", vec![inverted]).unwrap_err().to_string(),
            "field 'n' has min greater than max"
        );
    }

    #[test]
    fn min_date_round_trips_through_plain_strings() {
        assert_eq!(MinDate::from("today".to_string()), MinDate::Today);
        let fixed = MinDate::from("2024-01-31".to_string());
        assert_eq!(
            fixed.resolve(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert_eq!(String::from(MinDate::Today), "today");
    }
}
