use common::model::settings::CompanySettings;
use common::requests::{BackupResponse, SmtpTestResult};

pub enum Msg {
    SetSettings(CompanySettings),
    SetField(&'static str, String),
    SetSmtpSecure(bool),
    SetBackupFrequency(String),
    Save,
    SaveFinished(Option<CompanySettings>),
    TestSmtp,
    SmtpTested(Option<SmtpTestResult>),
    RunBackup,
    BackupFinished(Option<BackupResponse>),
    ScheduleBackup,
}
