use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-field error messages, kept in the order the fields were evaluated.
///
/// Serialized as a plain JSON object (`{ "age": "Age must be at least 18." }`),
/// which is exactly the body of a `400` response from `POST /api/submissions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`, replacing an earlier message for the same field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn remove(&mut self, field: &str) {
        self.entries.retain(|(name, _)| name != field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, message) in &self.entries {
            map.serialize_entry(name, message)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from field name to error message")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut errors = FieldErrors::new();
                while let Some((name, message)) = access.next_entry::<String, String>()? {
                    errors.insert(name, message);
                }
                Ok(errors)
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_in_json() {
        let mut errors = FieldErrors::new();
        errors.insert("zeta", "Zeta is required.");
        errors.insert("alpha", "Alpha is required.");
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"zeta":"Zeta is required.","alpha":"Alpha is required."}"#
        );
    }

    #[test]
    fn reads_a_server_error_body() {
        let errors: FieldErrors =
            serde_json::from_str(r#"{"age":"Age must be at least 18."}"#).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("age"), Some("Age must be at least 18."));
        assert!(!errors.contains("fullName"));
    }

    #[test]
    fn insert_replaces_and_remove_drops() {
        let mut errors = FieldErrors::new();
        errors.insert("a", "first");
        errors.insert("a", "second");
        assert_eq!(errors.iter().collect::<Vec<_>>(), [("a", "second")]);
        errors.remove("a");
        assert!(errors.is_empty());
    }
}
