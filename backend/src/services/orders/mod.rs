//! # Orders Service Module
//!
//! Aggregates the API endpoints for translation orders under `/api/orders`:
//! listing, retrieval, creation, mutable-field updates, deletion, and the
//! multipart upload of translated documents.
//!
//! The row store persisted document columns inconsistently over time (bare
//! URL, JSON array, double-serialized array). All read paths in this module
//! run those columns through `DocumentField::normalize` so responses always
//! carry canonical arrays, and all write paths persist the canonical form.

mod create;
mod delete;
mod get;
mod list;
mod update;
mod upload;

use actix_web::web;
use actix_web::Scope;
use common::model::documents::{parse_document_column, DocumentField};
use common::model::order::TranslationOrder;
use rusqlite::{Connection, Row};

const API_PATH: &str = "/api/orders";

/// Configures and returns the Actix `Scope` for all order routes.
///
/// # Registered Routes:
/// *   **`GET /`**: all orders, newest request first.
/// *   **`POST /`**: create an order (server assigns id, verification
///     token and timestamps).
/// *   **`GET /{id}`**: one order with normalized document fields.
/// *   **`PUT /{id}`**: update status/progress/notes/documents.
/// *   **`DELETE /{id}`**: delete the order outright.
/// *   **`POST /{id}/documents`**: upload one translated document and
///     append its public URL to the order.
pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::put().to(update::process))
        .route("/{id}", web::delete().to(delete::process))
        .route("/{id}/documents", web::post().to(upload::process))
}

/// Column list shared by every SELECT in this module; `order_from_row`
/// depends on this ordering.
pub(crate) const ORDER_COLUMNS: &str = "id, nombre, correo, telefono, idioma_origen, \
     idioma_destino, status, tiempo_procesamiento, progress, internal_notes, \
     fecha_solicitud, created_at, updated_at, verification_token, archivos_urls, \
     docs_translated, document_type, word_count, estimated_delivery";

/// Maps one row to a `TranslationOrder`, canonicalizing both document
/// columns on the way out.
pub(crate) fn order_from_row(row: &Row) -> rusqlite::Result<TranslationOrder> {
    let archivos: Option<String> = row.get(14)?;
    let translated: Option<String> = row.get(15)?;
    Ok(TranslationOrder {
        id: row.get(0)?,
        nombre: row.get(1)?,
        correo: row.get(2)?,
        telefono: row.get(3)?,
        idioma_origen: row.get(4)?,
        idioma_destino: row.get(5)?,
        status: row.get(6)?,
        tiempo_procesamiento: row.get(7)?,
        progress: row.get::<_, i64>(8)?.clamp(0, 100) as u8,
        internal_notes: row.get(9)?,
        fecha_solicitud: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
        verification_token: row.get(13)?,
        archivos_urls: parse_document_column(archivos).canonical(),
        docs_translated: parse_document_column(translated).canonical(),
        document_type: row.get(16)?,
        word_count: row.get(17)?,
        estimated_delivery: row.get(18)?,
    })
}

/// Serializes a document field to its canonical column text (a JSON array
/// of URL strings).
pub(crate) fn document_column_text(field: &DocumentField) -> Result<String, String> {
    serde_json::to_string(&field.normalize()).map_err(|e| e.to_string())
}

/// Fetches one order by id; `Ok(None)` when the row does not exist.
pub(crate) fn fetch_order(
    conn: &Connection,
    id: &str,
) -> Result<Option<TranslationOrder>, String> {
    let sql = format!(
        "SELECT {} FROM solicitudes_traduccion WHERE id = ?1",
        ORDER_COLUMNS
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    match stmt.query_row([id], order_from_row) {
        Ok(order) => Ok(Some(order)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db;
    use rusqlite::params;

    pub(crate) fn insert_order(conn: &Connection, id: &str, docs_translated: &str) {
        conn.execute(
            "INSERT INTO solicitudes_traduccion \
             (id, nombre, correo, idioma_origen, idioma_destino, status, \
              tiempo_procesamiento, progress, fecha_solicitud, created_at, \
              updated_at, verification_token, docs_translated) \
             VALUES (?1, 'Ana', 'ana@test.com', 'Español', 'Inglés', 'nuevo', \
                     3, 0, '2026-01-01T00:00:00Z', '2026-01-01T00:00:00Z', \
                     '2026-01-01T00:00:00Z', ?2, ?3)",
            params![id, format!("token-{}", id), docs_translated],
        )
        .expect("insert order");
    }

    #[test]
    fn fetch_canonicalizes_legacy_document_encodings() {
        let conn = db::open_in_memory();
        // Double-serialized array, the known upstream bug.
        insert_order(&conn, "o1", "[\"[\\\"http://a\\\",\\\"http://b\\\"]\"]");
        let order = fetch_order(&conn, "o1").unwrap().unwrap();
        assert_eq!(order.docs_translated.normalize(), vec!["http://a", "http://b"]);

        // Bare URL stored as plain text.
        insert_order(&conn, "o2", "http://solo.pdf");
        let order = fetch_order(&conn, "o2").unwrap().unwrap();
        assert_eq!(order.docs_translated.normalize(), vec!["http://solo.pdf"]);
    }

    #[test]
    fn fetch_missing_order_is_none() {
        let conn = db::open_in_memory();
        assert!(fetch_order(&conn, "nope").unwrap().is_none());
    }
}
