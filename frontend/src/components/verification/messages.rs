use common::model::order::TranslationOrder;
use common::model::settings::CompanySettings;

pub enum Msg {
    SetOrder(Box<TranslationOrder>),
    SetCompany(Box<CompanySettings>),
    TokenInvalid,
    LoadFailed,
    Retry,
}
