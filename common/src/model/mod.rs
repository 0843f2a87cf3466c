pub mod form_schema;
pub mod submission;
