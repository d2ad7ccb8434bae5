use common::model::order::TranslationOrder;

/// Draft for the "Nueva orden" form; everything is kept as strings until
/// submit so partial input never breaks typing.
#[derive(Default, Clone, PartialEq)]
pub struct OrderDraft {
    pub nombre: String,
    pub correo: String,
    pub telefono: String,
    pub idioma_origen: String,
    pub idioma_destino: String,
    pub tiempo_procesamiento: String,
}

pub struct Dashboard {
    pub orders: Vec<TranslationOrder>,
    pub loading: bool,
    pub load_error: bool,
    pub search: String,
    pub status_filter: String,
    /// Id of the order awaiting delete confirmation.
    pub pending_delete: Option<String>,
    pub show_create_form: bool,
    pub draft: OrderDraft,
    pub loaded: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            load_error: false,
            search: String::new(),
            status_filter: "todos".to_string(),
            pending_delete: None,
            show_create_form: false,
            draft: OrderDraft::default(),
            loaded: false,
        }
    }

    /// Orders matching the current search text and status filter. The
    /// search checks name, email, languages and id, case-insensitively.
    pub fn filtered_orders(&self) -> Vec<&TranslationOrder> {
        let needle = self.search.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|order| {
                self.status_filter == "todos" || order.status == self.status_filter
            })
            .filter(|order| {
                needle.is_empty()
                    || order.nombre.to_lowercase().contains(&needle)
                    || order.correo.to_lowercase().contains(&needle)
                    || order.idioma_origen.to_lowercase().contains(&needle)
                    || order.idioma_destino.to_lowercase().contains(&needle)
                    || order.id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn count_with_status(&self, status: &str) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }
}
