//! Email templates and the `#{name}` placeholder substitutor.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The five template kinds the mailer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    OrderCreated,
    OrderUpdated,
    VerificationLink,
    OrderCompleted,
    OrderDelivered,
}

impl TemplateType {
    pub const ALL: [TemplateType; 5] = [
        TemplateType::OrderCreated,
        TemplateType::OrderUpdated,
        TemplateType::VerificationLink,
        TemplateType::OrderCompleted,
        TemplateType::OrderDelivered,
    ];

    pub fn parse(raw: &str) -> Option<TemplateType> {
        match raw {
            "order_created" => Some(TemplateType::OrderCreated),
            "order_updated" => Some(TemplateType::OrderUpdated),
            "verification_link" => Some(TemplateType::VerificationLink),
            "order_completed" => Some(TemplateType::OrderCompleted),
            "order_delivered" => Some(TemplateType::OrderDelivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::OrderCreated => "order_created",
            TemplateType::OrderUpdated => "order_updated",
            TemplateType::VerificationLink => "verification_link",
            TemplateType::OrderCompleted => "order_completed",
            TemplateType::OrderDelivered => "order_delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateType::OrderCreated => "Orden Creada",
            TemplateType::OrderUpdated => "Estado Actualizado",
            TemplateType::VerificationLink => "Enlace de Verificación",
            TemplateType::OrderCompleted => "Traducción Completada",
            TemplateType::OrderDelivered => "Orden Entregada",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TemplateType::OrderCreated => "badge-template-created",
            TemplateType::OrderUpdated => "badge-template-updated",
            TemplateType::VerificationLink => "badge-template-verification",
            TemplateType::OrderCompleted => "badge-template-completed",
            TemplateType::OrderDelivered => "badge-template-delivered",
        }
    }
}

/// Label and style for a raw template-type string, falling back to the raw
/// value with the default style.
pub fn template_type_config(raw: &str) -> (String, &'static str) {
    match TemplateType::parse(raw) {
        Some(kind) => (kind.label().to_string(), kind.css_class()),
        None => (raw.to_string(), "badge-template-default"),
    }
}

/// One email template row. `kind` stays a raw string for the same reason
/// order status does: unknown values render with a fallback instead of
/// failing to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
    /// Advisory metadata for the editor UI; not enforced against the
    /// placeholders actually present in the content.
    #[serde(default)]
    pub variables: Vec<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Replaces every `#{name}` placeholder whose name appears in `variables`.
/// Unknown placeholders are left verbatim. Works for any variable name; the
/// fixed nine-name vocabulary lives in `available_variables`.
pub fn substitute_variables(content: &str, variables: &HashMap<String, String>) -> String {
    let re = Regex::new(r"#\{([A-Za-z0-9_]+)\}").unwrap();
    re.replace_all(content, |caps: &regex::Captures| {
        let name = &caps[1];
        variables
            .get(name)
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

/// The closed variable vocabulary used by the shipped templates.
pub fn available_variables() -> [&'static str; 9] {
    [
        "client_name",
        "order_id",
        "source_language",
        "target_language",
        "processing_time",
        "status",
        "progress",
        "verification_url",
        "status_message",
    ]
}

/// Demo values used for editor previews.
pub fn sample_variables() -> HashMap<String, String> {
    let pairs = [
        ("client_name", "María García"),
        ("order_id", "12345678"),
        ("source_language", "Español"),
        ("target_language", "Inglés"),
        ("processing_time", "5"),
        ("status", "En Proceso"),
        ("progress", "75"),
        ("verification_url", "https://example.com/verificar/abc123"),
        (
            "status_message",
            "Su traducción está progresando según lo programado.",
        ),
    ];
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn replaces_known_placeholder_everywhere() {
        let out = substitute_variables(
            "Hola #{name}, su orden #{name} avanza.",
            &vars(&[("name", "Ana")]),
        );
        assert_eq!(out, "Hola Ana, su orden Ana avanza.");
    }

    #[test]
    fn unknown_placeholder_is_left_verbatim() {
        let out = substitute_variables("Hola #{missing}", &vars(&[("name", "Ana")]));
        assert_eq!(out, "Hola #{missing}");
    }

    #[test]
    fn empty_mapping_is_identity() {
        let content = "Estado: #{status} (#{progress}%)";
        assert_eq!(substitute_variables(content, &HashMap::new()), content);
    }

    #[test]
    fn sample_mapping_covers_the_vocabulary() {
        let sample = sample_variables();
        for name in available_variables() {
            assert!(sample.contains_key(name), "missing sample for {}", name);
        }
        assert_eq!(sample.len(), available_variables().len());
    }

    #[test]
    fn template_type_labels_and_fallback() {
        for kind in TemplateType::ALL {
            let (label, _) = template_type_config(kind.as_str());
            assert_eq!(label, kind.label());
        }
        let (label, css) = template_type_config("boletin");
        assert_eq!(label, "boletin");
        assert_eq!(css, "badge-template-default");
    }
}
