use common::model::template::EmailTemplate;

pub enum Msg {
    SetTemplates(Vec<EmailTemplate>),
    Edit(String),
    NewTemplate,
    CloseEditor,
    SetTab(String),
    SetField(&'static str, String),
    SetActive(bool),
    InsertVariable(&'static str),
    Save,
    SaveFinished(Option<EmailTemplate>),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
}
