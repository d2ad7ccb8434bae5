use common::model::order::TranslationOrder;
use common::model::settings::CompanySettings;

pub struct VerificationPage {
    pub order: Option<TranslationOrder>,
    pub company: Option<CompanySettings>,
    /// The token exists but lookup failed (network or server error).
    pub load_error: bool,
    /// The server answered 404: the token matches no order.
    pub token_invalid: bool,
    pub loaded: bool,
}

impl VerificationPage {
    pub fn new() -> Self {
        Self {
            order: None,
            company: None,
            load_error: false,
            token_invalid: false,
            loaded: false,
        }
    }
}
