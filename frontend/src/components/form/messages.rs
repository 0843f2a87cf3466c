use common::responses::CreateSubmissionResponse;
use common::validation::FieldErrors;
use serde_json::Value;

pub enum Msg {
    /// New raw value for a field; `None` clears it.
    SetValue(String, Option<Value>),
    /// Adds or removes one option of a multi-select.
    ToggleOption { field: String, option: String },
    Touch(String),
    Submit,
    Submitted(CreateSubmissionResponse),
    Rejected(FieldErrors),
    SubmitFailed(String),
    Reset,
}
