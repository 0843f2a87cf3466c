use common::responses::ListSubmissionsResponse;

pub enum Msg {
    /// Fetches the page described by the current parameters.
    Load,
    Loaded(ListSubmissionsResponse),
    LoadFailed(String),
    GoToPage(usize),
    ToggleSort,
    ShowDetail(String),
    CloseDetail,
    AskDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(String),
    DeleteFailed(String),
}
