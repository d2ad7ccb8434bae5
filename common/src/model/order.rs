//! Translation-order model plus the status and priority lookup tables.

use serde::{Deserialize, Serialize};

use crate::model::documents::DocumentField;

/// The four canonical order states. This is a display vocabulary, not a
/// state machine: the update form may write any value regardless of the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Nuevo,
    EnProceso,
    Completado,
    Entregado,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Nuevo,
        OrderStatus::EnProceso,
        OrderStatus::Completado,
        OrderStatus::Entregado,
    ];

    pub fn parse(raw: &str) -> Option<OrderStatus> {
        match raw {
            "nuevo" => Some(OrderStatus::Nuevo),
            "en_proceso" => Some(OrderStatus::EnProceso),
            "completado" => Some(OrderStatus::Completado),
            "entregado" => Some(OrderStatus::Entregado),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Nuevo => "nuevo",
            OrderStatus::EnProceso => "en_proceso",
            OrderStatus::Completado => "completado",
            OrderStatus::Entregado => "entregado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Nuevo => "Nuevo",
            OrderStatus::EnProceso => "En Proceso",
            OrderStatus::Completado => "Completado",
            OrderStatus::Entregado => "Entregado",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Nuevo => "badge-status-nuevo",
            OrderStatus::EnProceso => "badge-status-en-proceso",
            OrderStatus::Completado => "badge-status-completado",
            OrderStatus::Entregado => "badge-status-entregado",
        }
    }
}

/// Label and style for a raw status string; unrecognized values fall back to
/// the raw string with the default style.
pub fn status_config(raw: &str) -> (String, &'static str) {
    match OrderStatus::parse(raw) {
        Some(status) => (status.label().to_string(), status.css_class()),
        None => (raw.to_string(), "badge-status-default"),
    }
}

/// Priority tier derived from the processing-time day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPriority {
    Urgente,
    Alta,
    Media,
    Baja,
}

impl ProcessingPriority {
    pub fn from_days(days: i64) -> ProcessingPriority {
        if days <= 1 {
            ProcessingPriority::Urgente
        } else if days <= 3 {
            ProcessingPriority::Alta
        } else if days <= 7 {
            ProcessingPriority::Media
        } else {
            ProcessingPriority::Baja
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingPriority::Urgente => "Urgente",
            ProcessingPriority::Alta => "Alta",
            ProcessingPriority::Media => "Media",
            ProcessingPriority::Baja => "Baja",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProcessingPriority::Urgente => "badge-priority-urgente",
            ProcessingPriority::Alta => "badge-priority-alta",
            ProcessingPriority::Media => "badge-priority-media",
            ProcessingPriority::Baja => "badge-priority-baja",
        }
    }

    /// Badge text, e.g. `"3 días (Alta)"` (singular for one day).
    pub fn badge_label(days: i64) -> String {
        let tier = ProcessingPriority::from_days(days);
        let unit = if days == 1 { "día" } else { "días" };
        format!("{} {} ({})", days, unit, tier.label())
    }
}

/// Client-facing sentence for the verification page.
pub fn progress_message(status: &str, progress: u8) -> String {
    match OrderStatus::parse(status) {
        Some(OrderStatus::Nuevo) => {
            "Su orden ha sido recibida y será procesada pronto.".to_string()
        }
        Some(OrderStatus::EnProceso) => format!(
            "Su traducción está en progreso ({}% completado).",
            progress
        ),
        Some(OrderStatus::Completado) => {
            "Su traducción ha sido completada y está lista para entrega.".to_string()
        }
        Some(OrderStatus::Entregado) => {
            "Su traducción ha sido entregada. Puede descargar los archivos traducidos."
                .to_string()
        }
        None => "Estado desconocido.".to_string(),
    }
}

/// One translation order as exchanged with the backend.
///
/// `status` stays a raw string so that rows written with an unknown value
/// still load and render (with the fallback style) instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationOrder {
    pub id: String,
    pub nombre: String,
    pub correo: String,
    #[serde(default)]
    pub telefono: String,
    pub idioma_origen: String,
    pub idioma_destino: String,
    pub status: String,
    pub tiempo_procesamiento: i64,
    pub progress: u8,
    #[serde(default)]
    pub internal_notes: String,
    pub fecha_solicitud: String,
    pub created_at: String,
    pub updated_at: String,
    pub verification_token: String,
    #[serde(default)]
    pub archivos_urls: DocumentField,
    #[serde(default)]
    pub docs_translated: DocumentField,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub word_count: Option<i64>,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
}

impl TranslationOrder {
    /// Short id for headings ("Orden #xxxxxxxx").
    pub fn short_id(&self) -> &str {
        let end = self.id.len().min(8);
        &self.id[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_boundaries_map_exactly() {
        assert_eq!(ProcessingPriority::from_days(1), ProcessingPriority::Urgente);
        assert_eq!(ProcessingPriority::from_days(3), ProcessingPriority::Alta);
        assert_eq!(ProcessingPriority::from_days(7), ProcessingPriority::Media);
        assert_eq!(ProcessingPriority::from_days(8), ProcessingPriority::Baja);
    }

    #[test]
    fn priority_badge_pluralizes() {
        assert_eq!(ProcessingPriority::badge_label(1), "1 día (Urgente)");
        assert_eq!(ProcessingPriority::badge_label(3), "3 días (Alta)");
    }

    #[test]
    fn status_labels_are_distinct_and_stable() {
        let mut seen = std::collections::HashSet::new();
        for status in OrderStatus::ALL {
            let (label, css) = status_config(status.as_str());
            assert_eq!(label, status.label());
            assert!(seen.insert((label, css)));
        }
    }

    #[test]
    fn unknown_status_falls_back_to_raw() {
        let (label, css) = status_config("archivado");
        assert_eq!(label, "archivado");
        assert_eq!(css, "badge-status-default");
    }

    #[test]
    fn progress_messages_per_status() {
        assert!(progress_message("nuevo", 0).contains("recibida"));
        assert_eq!(
            progress_message("en_proceso", 75),
            "Su traducción está en progreso (75% completado)."
        );
        assert!(progress_message("completado", 100).contains("lista para entrega"));
        assert!(progress_message("entregado", 100).contains("descargar"));
        assert_eq!(progress_message("otra_cosa", 10), "Estado desconocido.");
    }

    #[test]
    fn status_round_trips_through_serde() {
        let json = serde_json::to_string(&OrderStatus::EnProceso).unwrap();
        assert_eq!(json, "\"en_proceso\"");
        let parsed: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, OrderStatus::EnProceso);
    }
}
