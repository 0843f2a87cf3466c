use common::model::submission::Submission;
use common::requests::ListParams;
use common::responses::PageMeta;
use yew::NodeRef;

pub struct SubmissionsPanel {
    /// Page, limit and order of the listing currently shown.
    pub params: ListParams,

    pub rows: Vec<Submission>,
    pub meta: Option<PageMeta>,
    pub loading: bool,
    pub load_error: Option<String>,

    /// Submission shown in the detail sheet.
    pub selected: Option<Submission>,

    /// Id waiting for the user to confirm its deletion.
    pub pending_delete: Option<String>,
    pub deleting: bool,

    pub detail_sheet_ref: NodeRef,
    pub confirm_sheet_ref: NodeRef,

    /// Guard for the first-render fetch.
    pub loaded: bool,
}

impl SubmissionsPanel {
    pub fn new() -> Self {
        Self {
            params: ListParams::default(),
            rows: Vec::new(),
            meta: None,
            loading: false,
            load_error: None,
            selected: None,
            pending_delete: None,
            deleting: false,
            detail_sheet_ref: NodeRef::default(),
            confirm_sheet_ref: NodeRef::default(),
            loaded: false,
        }
    }

    pub fn row(&self, id: &str) -> Option<&Submission> {
        self.rows.iter().find(|s| s.id == id)
    }
}
