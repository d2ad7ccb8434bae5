//! Typed request/response payloads shared by frontend and backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::documents::DocumentField;
use crate::model::notification::NotificationKind;

/// Partial update for an order; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub internal_notes: Option<String>,
    /// Accepted in any of the legacy encodings; re-normalized before
    /// persisting.
    #[serde(default)]
    pub docs_translated: Option<DocumentField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub nombre: String,
    pub correo: String,
    #[serde(default)]
    pub telefono: String,
    pub idioma_origen: String,
    pub idioma_destino: String,
    pub tiempo_procesamiento: i64,
    #[serde(default)]
    pub archivos_urls: DocumentField,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub word_count: Option<i64>,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
}

/// Result of an uploaded translated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub docs_translated: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub action_url: Option<String>,
}

/// SMTP settings to test; when omitted the stored company settings are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmtpTestRequest {
    #[serde(default)]
    pub smtp_host: Option<String>,
    #[serde(default)]
    pub smtp_port: Option<u16>,
    #[serde(default)]
    pub smtp_user: Option<String>,
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default)]
    pub smtp_secure: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpTestResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleBackupRequest {
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupResponse {
    pub url: String,
    pub md5: String,
}

/// Content plus an optional variable mapping for template preview; the
/// sample mapping is used when none is posted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePreviewRequest {
    pub content: String,
    #[serde(default)]
    pub variables: Option<HashMap<String, String>>,
}
