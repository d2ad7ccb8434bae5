use common::model::order::TranslationOrder;

pub enum Msg {
    SetOrders(Vec<TranslationOrder>),
    LoadFailed,
    Retry,
    SetSearch(String),
    SetStatusFilter(String),
    OpenOrder(String),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    ToggleCreateForm,
    SetDraftField(&'static str, String),
    SubmitCreate,
    CreateFinished(bool),
}
