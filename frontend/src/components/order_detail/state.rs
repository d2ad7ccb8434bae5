use common::model::order::TranslationOrder;

/// State for the order detail page. The editable fields live outside the
/// loaded order so edits are only persisted on save.
pub struct OrderDetail {
    pub order: Option<TranslationOrder>,
    pub load_error: bool,
    pub status: String,
    pub progress: u8,
    pub internal_notes: String,
    /// Working copy of the translated document URLs, already normalized.
    pub documents: Vec<String>,
    pub saving: bool,
    pub uploading: bool,
    pub pending_remove: Option<usize>,
    pub loaded: bool,
}

impl OrderDetail {
    pub fn new() -> Self {
        Self {
            order: None,
            load_error: false,
            status: String::new(),
            progress: 0,
            internal_notes: String::new(),
            documents: Vec::new(),
            saving: false,
            uploading: false,
            pending_remove: None,
            loaded: false,
        }
    }

    /// Copies the server state into the editable fields.
    pub fn adopt(&mut self, order: TranslationOrder) {
        self.status = order.status.clone();
        self.progress = order.progress;
        self.internal_notes = order.internal_notes.clone();
        self.documents = order.docs_translated.normalize();
        self.order = Some(order);
    }
}
