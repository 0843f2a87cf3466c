//! Component state for the schema-driven form.

use std::collections::HashSet;
use std::rc::Rc;

use common::model::form_schema::FormSchema;
use common::validation::{FieldErrors, RawRecord};

use super::helpers::default_values;

pub struct DynamicForm {
    /// Shared with the parent; never modified here.
    pub schema: Rc<FormSchema>,

    /// Current raw values keyed by field name, exactly what gets posted.
    pub values: RawRecord,

    /// Latest message per field, from the local engine or from the server.
    pub errors: FieldErrors,

    /// Fields the user has interacted with. Errors of untouched fields stay
    /// hidden until the first submit attempt touches everything.
    pub touched: HashSet<String>,

    /// A POST is in flight; the submit button is disabled meanwhile.
    pub submitting: bool,
}

impl DynamicForm {
    pub fn new(schema: &Rc<FormSchema>) -> Self {
        Self {
            values: default_values(schema),
            schema: Rc::clone(schema),
            errors: FieldErrors::new(),
            touched: HashSet::new(),
            submitting: false,
        }
    }

    /// Error to display under `field`, if it has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn touch_all(&mut self) {
        self.touched = self
            .schema
            .fields()
            .iter()
            .map(|f| f.name.clone())
            .collect();
    }
}
