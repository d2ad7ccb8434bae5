//! Document-reference fields and their normalization.
//!
//! The row store persists "documents attached to an order" inconsistently:
//! the same column may hold `null`, a single URL string, a real JSON array of
//! URLs, or a string that *contains* a serialized JSON array (a
//! double-serialization bug upstream). `DocumentField` models that raw value
//! as a tagged union at the deserialization boundary, and `normalize` is the
//! single place that converts any of those shapes into a canonical ordered
//! list of usable URLs.
//!
//! Normalization is total: malformed JSON, non-string elements and blank
//! values are dropped silently, never raised. The caller only ever observes
//! "fewer documents than expected".

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw persisted shape of a document-reference column.
///
/// Deserialized untagged so the store can hand back any of its historical
/// encodings. A missing or `null` column maps to `Absent` (use
/// `#[serde(default)]` on fields of this type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentField {
    #[default]
    Absent,
    Single(String),
    Many(Vec<Value>),
}

impl DocumentField {
    /// Converts the raw field into an ordered list of document URLs.
    ///
    /// Rules, in element order:
    /// - non-strings and blank strings are skipped;
    /// - a trimmed string shaped like `[...]` is parsed as a JSON array and
    ///   its string elements are appended (the known encoding bug nests at
    ///   most one level, so a single parse suffices);
    /// - anything else is kept only when it starts with `http` or `blob:`.
    ///
    /// Duplicates are preserved; downstream display indexes by position.
    pub fn normalize(&self) -> Vec<String> {
        let mut urls = Vec::new();
        match self {
            DocumentField::Absent => {}
            DocumentField::Single(raw) => collect_candidate(raw, &mut urls),
            DocumentField::Many(items) => {
                for item in items {
                    if let Value::String(raw) = item {
                        collect_candidate(raw, &mut urls);
                    }
                }
            }
        }
        urls
    }

    /// The canonical form of this field: a plain JSON array of the
    /// normalized URLs. Writing this back is what stops the legacy
    /// encodings from propagating.
    pub fn canonical(&self) -> DocumentField {
        DocumentField::Many(self.normalize().into_iter().map(Value::String).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.normalize().is_empty()
    }
}

/// Re-reads a raw database column into a `DocumentField`.
///
/// The column is TEXT: valid JSON is taken at face value, anything else is a
/// single bare URL string.
pub fn parse_document_column(raw: Option<String>) -> DocumentField {
    match raw {
        None => DocumentField::Absent,
        Some(text) => match serde_json::from_str::<DocumentField>(&text) {
            Ok(field) => field,
            Err(_) => DocumentField::Single(text),
        },
    }
}

fn collect_candidate(raw: &str, urls: &mut Vec<String>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
            for item in items {
                if let Value::String(nested) = item {
                    let nested = nested.trim();
                    if !nested.is_empty() && is_document_url(nested) {
                        urls.push(nested.to_string());
                    }
                }
            }
            return;
        }
        // Malformed or non-array JSON: fall back to the plain URL rule.
    }

    if is_document_url(trimmed) {
        urls.push(trimmed.to_string());
    }
}

fn is_document_url(candidate: &str) -> bool {
    candidate.starts_with("http") || candidate.starts_with("blob:")
}

/// Display category for a document URL, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Pdf,
    WordDoc,
    PlainText,
    Image,
    Default,
}

impl FileIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            FileIcon::Pdf | FileIcon::Default => "\u{1F4C4}",
            FileIcon::WordDoc => "\u{1F4DD}",
            FileIcon::PlainText => "\u{1F4C3}",
            FileIcon::Image => "\u{1F5BC}\u{FE0F}",
        }
    }
}

pub fn file_icon(url: &str) -> FileIcon {
    let extension = url.rsplit('.').next().unwrap_or("").to_lowercase();
    match extension.as_str() {
        "pdf" => FileIcon::Pdf,
        "doc" | "docx" => FileIcon::WordDoc,
        "txt" => FileIcon::PlainText,
        "jpg" | "jpeg" | "png" => FileIcon::Image,
        _ => FileIcon::Default,
    }
}

/// Extracts a human-readable filename from a storage URL.
///
/// Storage keys are generated as `<millis>-<uuid>-<original name>`; the
/// prefix is stripped so the client sees the name they uploaded. Degrades to
/// the literal `"documento"` on empty or unusable input.
pub fn extract_file_name(url: &str) -> String {
    if url.trim().is_empty() {
        return "documento".to_string();
    }

    let segment = url.rsplit('/').next().unwrap_or(url);
    if segment.is_empty() {
        return "documento".to_string();
    }

    let re = Regex::new(r"^\d+-[a-f0-9-]+-").unwrap();
    let cleaned = re.replace(segment, "");
    if cleaned.is_empty() {
        segment.to_string()
    } else {
        cleaned.into_owned()
    }
}

/// Extension of the extracted filename, lowercased; `"pdf"` when absent.
pub fn file_extension(url: &str) -> String {
    let name = extract_file_name(url);
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => "pdf".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: serde_json::Value) -> DocumentField {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_and_blank_inputs_normalize_to_empty() {
        assert!(DocumentField::Absent.normalize().is_empty());
        assert!(field(json!(null)).normalize().is_empty());
        assert!(field(json!("")).normalize().is_empty());
        assert!(field(json!("   ")).normalize().is_empty());
    }

    #[test]
    fn single_url_passes_through() {
        let f = field(json!("https://store/archivo.pdf"));
        assert_eq!(f.normalize(), vec!["https://store/archivo.pdf"]);
    }

    #[test]
    fn json_array_string_is_unwrapped_in_order() {
        let f = field(json!("[\"http://a\",\"http://b\"]"));
        assert_eq!(f.normalize(), vec!["http://a", "http://b"]);
    }

    #[test]
    fn malformed_json_falls_back_without_panicking() {
        // Not URL-prefixed, so the strict rule drops it.
        let f = field(json!("[invalid json"));
        assert!(f.normalize().is_empty());

        // A JSON-shaped string that fails to parse but carries a URL prefix
        // never occurs in practice; the fallback path still accepts a plain
        // blob: URL handed through the single-string shape.
        let f = field(json!("blob:abc123"));
        assert_eq!(f.normalize(), vec!["blob:abc123"]);
    }

    #[test]
    fn nulls_and_blanks_are_dropped_order_preserved() {
        let f = field(json!(["http://x", null, "", "http://y"]));
        assert_eq!(f.normalize(), vec!["http://x", "http://y"]);
    }

    #[test]
    fn double_serialized_element_is_unwrapped() {
        let f = field(json!(["[\"http://a\",\"http://b\"]", "http://c"]));
        assert_eq!(f.normalize(), vec!["http://a", "http://b", "http://c"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let f = field(json!(["http://x", "http://x"]));
        assert_eq!(f.normalize(), vec!["http://x", "http://x"]);
    }

    #[test]
    fn non_url_strings_are_rejected() {
        let f = field(json!(["nota interna", "http://x"]));
        assert_eq!(f.normalize(), vec!["http://x"]);
    }

    #[test]
    fn canonical_form_is_a_plain_array() {
        let f = field(json!("[\"http://a\"]"));
        let canonical = serde_json::to_string(&f.canonical()).unwrap();
        assert_eq!(canonical, "[\"http://a\"]");
    }

    #[test]
    fn column_parsing_handles_legacy_text() {
        assert_eq!(parse_document_column(None), DocumentField::Absent);
        assert_eq!(
            parse_document_column(Some("http://x".into())),
            DocumentField::Single("http://x".into())
        );
        let parsed = parse_document_column(Some("[\"http://a\"]".into()));
        assert_eq!(parsed.normalize(), vec!["http://a"]);
    }

    #[test]
    fn filename_strips_storage_prefix() {
        let url =
            "https://store/123456789-abcdef12-3456-7890-abcd-ef1234567890-report.pdf";
        assert_eq!(extract_file_name(url), "report.pdf");
    }

    #[test]
    fn filename_degrades_to_placeholder() {
        assert_eq!(extract_file_name(""), "documento");
        assert_eq!(extract_file_name("   "), "documento");
        assert_eq!(extract_file_name("https://store/path/"), "documento");
    }

    #[test]
    fn extension_defaults_to_pdf() {
        assert_eq!(file_extension("https://store/archivo.DOCX"), "docx");
        assert_eq!(file_extension("https://store/archivo"), "pdf");
    }

    #[test]
    fn icons_by_extension() {
        assert_eq!(file_icon("a.pdf"), FileIcon::Pdf);
        assert_eq!(file_icon("a.doc"), FileIcon::WordDoc);
        assert_eq!(file_icon("a.docx"), FileIcon::WordDoc);
        assert_eq!(file_icon("a.txt"), FileIcon::PlainText);
        assert_eq!(file_icon("a.JPG"), FileIcon::Image);
        assert_eq!(file_icon("a.zip"), FileIcon::Default);
    }
}
