use std::rc::Rc;

use common::model::form_schema::FormSchema;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DynamicFormProps {
    /// The form to render, as served by `/api/form-schema`.
    pub schema: Rc<FormSchema>,

    /// Called with the new submission id once the backend accepted the form.
    #[prop_or_default]
    pub on_submitted: Callback<String>,
}
