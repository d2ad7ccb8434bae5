use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use common::model::order::TranslationOrder;
use log::error;
use rusqlite::Connection;

use crate::db;
use crate::services::orders::{order_from_row, ORDER_COLUMNS};

/// `GET /api/verificar/{token}`. Looks an order up by its verification
/// token for the public status page.
pub async fn process(path: Path<String>) -> impl Responder {
    let token = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match fetch_by_token(&conn, &token) {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => HttpResponse::NotFound().body("Código de verificación inválido"),
        Err(e) => {
            error!("Error verificando el token: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn fetch_by_token(conn: &Connection, token: &str) -> Result<Option<TranslationOrder>, String> {
    let sql = format!(
        "SELECT {} FROM solicitudes_traduccion WHERE verification_token = ?1",
        ORDER_COLUMNS
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    match stmt.query_row([token], order_from_row) {
        Ok(mut order) => {
            // The public page never sees staff notes.
            order.internal_notes = String::new();
            Ok(Some(order))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::orders::tests::insert_order;
    use rusqlite::params;

    #[test]
    fn finds_order_by_token_without_notes() {
        let conn = db::open_in_memory();
        insert_order(&conn, "o1", "[]");
        conn.execute(
            "UPDATE solicitudes_traduccion SET internal_notes = ?1 WHERE id = 'o1'",
            params!["nota privada"],
        )
        .unwrap();
        let order = fetch_by_token(&conn, "token-o1").unwrap().unwrap();
        assert_eq!(order.id, "o1");
        assert!(order.internal_notes.is_empty());
    }

    #[test]
    fn unknown_token_is_none() {
        let conn = db::open_in_memory();
        assert!(fetch_by_token(&conn, "nada").unwrap().is_none());
    }
}
