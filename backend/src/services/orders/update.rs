use actix_web::web::{Json, Path};
use actix_web::{HttpResponse, Responder};
use common::model::order::TranslationOrder;
use common::requests::UpdateOrderRequest;
use log::{error, info};
use rusqlite::{params, Connection};

use crate::db;
use crate::services::orders::{document_column_text, fetch_order};

/// `PUT /api/orders/{id}`. Applies only the fields present in the request;
/// `docs_translated` is re-normalized before it touches the row.
pub async fn process(path: Path<String>, request: Json<UpdateOrderRequest>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match update_order(&conn, &id, &request) {
        Ok(Some(order)) => {
            info!("Orden actualizada: {}", id);
            HttpResponse::Ok().json(order)
        }
        Ok(None) => HttpResponse::NotFound().body("Orden no encontrada"),
        Err(e) => {
            error!("Error actualizando la orden {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn update_order(
    conn: &Connection,
    id: &str,
    request: &UpdateOrderRequest,
) -> Result<Option<TranslationOrder>, String> {
    if fetch_order(conn, id)?.is_none() {
        return Ok(None);
    }
    if let Some(status) = &request.status {
        conn.execute(
            "UPDATE solicitudes_traduccion SET status = ?1 WHERE id = ?2",
            params![status, id],
        )
        .map_err(|e| e.to_string())?;
    }
    if let Some(progress) = request.progress {
        conn.execute(
            "UPDATE solicitudes_traduccion SET progress = ?1 WHERE id = ?2",
            params![progress.min(100), id],
        )
        .map_err(|e| e.to_string())?;
    }
    if let Some(notes) = &request.internal_notes {
        conn.execute(
            "UPDATE solicitudes_traduccion SET internal_notes = ?1 WHERE id = ?2",
            params![notes, id],
        )
        .map_err(|e| e.to_string())?;
    }
    if let Some(docs) = &request.docs_translated {
        let column = document_column_text(docs)?;
        conn.execute(
            "UPDATE solicitudes_traduccion SET docs_translated = ?1 WHERE id = ?2",
            params![column, id],
        )
        .map_err(|e| e.to_string())?;
    }
    conn.execute(
        "UPDATE solicitudes_traduccion SET updated_at = ?1 WHERE id = ?2",
        params![db::now(), id],
    )
    .map_err(|e| e.to_string())?;
    fetch_order(conn, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::documents::DocumentField;
    use crate::services::orders::tests::insert_order;

    #[test]
    fn partial_update_leaves_other_fields_alone() {
        let conn = db::open_in_memory();
        insert_order(&conn, "o1", "[\"http://uno.pdf\"]");
        let request = UpdateOrderRequest {
            status: Some("en_proceso".into()),
            ..Default::default()
        };
        let order = update_order(&conn, "o1", &request).unwrap().unwrap();
        assert_eq!(order.status, "en_proceso");
        assert_eq!(order.progress, 0);
        assert_eq!(order.docs_translated.normalize(), vec!["http://uno.pdf"]);
    }

    #[test]
    fn legacy_document_payload_is_stored_canonically() {
        let conn = db::open_in_memory();
        insert_order(&conn, "o1", "[]");
        let request = UpdateOrderRequest {
            docs_translated: Some(DocumentField::Single(
                "[\"http://a.pdf\", \"http://b.pdf\"]".into(),
            )),
            ..Default::default()
        };
        update_order(&conn, "o1", &request).unwrap().unwrap();
        let stored: String = conn
            .query_row(
                "SELECT docs_translated FROM solicitudes_traduccion WHERE id = 'o1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, "[\"http://a.pdf\",\"http://b.pdf\"]");
    }

    #[test]
    fn updating_missing_order_is_none() {
        let conn = db::open_in_memory();
        let request = UpdateOrderRequest::default();
        assert!(update_order(&conn, "nope", &request).unwrap().is_none());
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        let conn = db::open_in_memory();
        insert_order(&conn, "o1", "[]");
        let request = UpdateOrderRequest {
            progress: Some(250),
            ..Default::default()
        };
        let order = update_order(&conn, "o1", &request).unwrap().unwrap();
        assert_eq!(order.progress, 100);
    }
}
