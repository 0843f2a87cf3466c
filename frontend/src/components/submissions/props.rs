use std::rc::Rc;

use common::model::form_schema::FormSchema;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SubmissionsProps {
    /// Supplies column labels and the field order of the detail sheet.
    pub schema: Rc<FormSchema>,
}
