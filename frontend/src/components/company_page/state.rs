use common::model::settings::CompanySettings;
use common::requests::BackupResponse;

pub struct CompanyPage {
    /// Editable copy of the settings; `None` while loading.
    pub settings: Option<CompanySettings>,
    pub saving: bool,
    pub testing_smtp: bool,
    pub backing_up: bool,
    /// Result of the last manual backup, shown under the button.
    pub last_backup: Option<BackupResponse>,
    pub loaded: bool,
}

impl CompanyPage {
    pub fn new() -> Self {
        Self {
            settings: None,
            saving: false,
            testing_smtp: false,
            backing_up: false,
            last_backup: None,
            loaded: false,
        }
    }
}
