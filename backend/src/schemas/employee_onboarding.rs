use common::model::form_schema::{
    DateRules, FieldDefinition, FieldKind, FormSchema, MinDate, MultiSelectRules, NumberRules,
    SchemaError, TextRules,
};

/// The "Employee Onboarding" form: the single schema exposed at `/api/form-schema`.
pub fn schema() -> Result<FormSchema, SchemaError> {
    FormSchema::new(
        "Employee Onboarding",
        vec![
            FieldDefinition::new(
                "fullName",
                "Full Name",
                FieldKind::Text {
                    validations: TextRules {
                        min_length: Some(2),
                        max_length: None,
                        pattern: Some(r"^[a-zA-Z\s]*$".to_string()),
                    },
                },
            )
            .required(),
            FieldDefinition::new(
                "age",
                "Age",
                FieldKind::Number {
                    validations: NumberRules {
                        min: Some(18.0),
                        max: Some(65.0),
                    },
                },
            )
            .required(),
            FieldDefinition::new(
                "department",
                "Department",
                FieldKind::Select {
                    options: options(&["HR", "Engineering", "Marketing"]),
                },
            )
            .required(),
            FieldDefinition::new(
                "skills",
                "Skills",
                FieldKind::MultiSelect {
                    options: options(&["React", "Node", "Python", "Java"]),
                    validations: MultiSelectRules {
                        min_selected: Some(1),
                        max_selected: Some(3),
                    },
                },
            ),
            FieldDefinition::new(
                "dateOfJoining",
                "Date of Joining",
                FieldKind::Date {
                    validations: DateRules {
                        min_date: Some(MinDate::Today),
                    },
                },
            )
            .required(),
            FieldDefinition::new(
                "bio",
                "Bio",
                FieldKind::Textarea {
                    validations: TextRules {
                        max_length: Some(200),
                        ..TextRules::default()
                    },
                },
            ),
            FieldDefinition::new("termsAccepted", "Terms Accepted", FieldKind::Switch).required(),
        ],
    )
}

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use common::validation::{validate, validate_at, RawRecord};
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn has_the_seven_reference_fields_in_order() {
        let schema = schema().unwrap();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["fullName", "age", "department", "skills", "dateOfJoining", "bio", "termsAccepted"]
        );
        assert!(!schema.field("skills").unwrap().required);
        assert!(!schema.field("bio").unwrap().required);
    }

    #[test]
    fn accepts_a_complete_valid_record() {
        let today = Local::now().date_naive();
        let result = validate(
            &schema().unwrap(),
            &record(json!({
                "fullName": "Ada Lovelace",
                "age": 36,
                "department": "Engineering",
                "skills": ["Python"],
                "dateOfJoining": (today + Duration::days(7)).format("%Y-%m-%d").to_string(),
                "bio": "Analytical engine programmer.",
                "termsAccepted": true
            })),
        );
        assert!(result.is_valid, "{:?}", result.errors);
    }

    #[test]
    fn reports_every_required_field_for_an_empty_record() {
        let today = Local::now().date_naive();
        let result = validate_at(&schema().unwrap(), &RawRecord::new(), today);
        assert_eq!(
            serde_json::to_value(&result.errors).unwrap(),
            json!({
                "fullName": "Full Name is required.",
                "age": "Age is required.",
                "department": "Department is required.",
                "dateOfJoining": "Date of Joining is required.",
                "termsAccepted": "Terms Accepted must be accepted."
            })
        );
    }

    #[test]
    fn serializes_like_the_published_document() {
        let value = serde_json::to_value(schema().unwrap()).unwrap();
        assert_eq!(value["title"], json!("Employee Onboarding"));
        assert_eq!(
            value["fields"][0],
            json!({
                "name": "fullName",
                "label": "Full Name",
                "type": "text",
                "required": true,
                "validations": { "minLength": 2, "pattern": "^[a-zA-Z\\s]*$" }
            })
        );
        assert_eq!(value["fields"][4]["validations"]["minDate"], json!("today"));
        assert_eq!(value["fields"][6], json!({
            "name": "termsAccepted",
            "label": "Terms Accepted",
            "type": "switch",
            "required": true
        }));
    }
}
