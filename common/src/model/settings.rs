//! Singleton company-settings record (identity, SMTP, backup policy).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub company_phone: Option<String>,
    #[serde(default)]
    pub company_email: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_user: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default = "default_true")]
    pub smtp_secure: bool,
    #[serde(default)]
    pub backup_enabled: bool,
    #[serde(default = "default_backup_frequency")]
    pub backup_frequency: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        CompanySettings {
            id: String::new(),
            company_name: String::new(),
            company_logo: None,
            company_address: None,
            company_phone: None,
            company_email: None,
            company_website: None,
            smtp_host: None,
            smtp_port: default_smtp_port(),
            smtp_user: None,
            smtp_password: None,
            smtp_secure: true,
            backup_enabled: false,
            backup_frequency: default_backup_frequency(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

fn default_smtp_port() -> u16 {
    587
}

fn default_true() -> bool {
    true
}

fn default_backup_frequency() -> String {
    "daily".to_string()
}
