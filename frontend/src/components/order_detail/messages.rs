use common::model::order::TranslationOrder;

pub enum Msg {
    SetOrder(TranslationOrder),
    LoadFailed,
    Retry,
    SetStatus(String),
    SetProgress(u8),
    SetNotes(String),
    Save,
    SaveFinished(Option<TranslationOrder>),
    FileSelected(web_sys::File),
    UploadFinished(Option<Vec<String>>),
    RequestRemoveDocument(usize),
    ConfirmRemoveDocument,
    CancelRemoveDocument,
    CopyVerificationLink,
    Back,
}
