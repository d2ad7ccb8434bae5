use common::model::template::EmailTemplate;

use crate::components::feedback::compute_md5;

pub struct TemplatesPage {
    pub templates: Vec<EmailTemplate>,
    /// Template currently in the editor; `None` shows only the list.
    pub editing: Option<EmailTemplate>,
    /// Either `"editor"` or `"preview"`.
    pub active_tab: String,
    /// MD5 of the editing template at load or last save. Used for the
    /// unsaved-changes indicator.
    pub original_md5: Option<String>,
    pub pending_delete: Option<String>,
    pub saving: bool,
    pub loaded: bool,
}

impl TemplatesPage {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            editing: None,
            active_tab: "editor".to_string(),
            original_md5: None,
            pending_delete: None,
            saving: false,
            loaded: false,
        }
    }

    /// Digest of the editable fields, in a fixed order.
    pub fn digest(template: &EmailTemplate) -> String {
        compute_md5(&format!(
            "{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
            template.name,
            template.kind,
            template.subject,
            template.html_content,
            template.text_content,
            template.is_active,
        ))
    }

    pub fn is_dirty(&self) -> bool {
        match (&self.editing, &self.original_md5) {
            (Some(template), Some(original)) => &Self::digest(template) != original,
            _ => false,
        }
    }
}
