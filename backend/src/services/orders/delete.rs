use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use log::{error, info};
use rusqlite::Connection;

use crate::db;

/// `DELETE /api/orders/{id}`.
pub async fn process(path: Path<String>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match delete_order(&conn, &id) {
        Ok(true) => {
            info!("Orden eliminada: {}", id);
            HttpResponse::Ok().finish()
        }
        Ok(false) => HttpResponse::NotFound().body("Orden no encontrada"),
        Err(e) => {
            error!("Error eliminando la orden {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn delete_order(conn: &Connection, id: &str) -> Result<bool, String> {
    conn.execute("DELETE FROM solicitudes_traduccion WHERE id = ?1", [id])
        .map(|changed| changed > 0)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::orders::tests::insert_order;

    #[test]
    fn delete_removes_the_row() {
        let conn = db::open_in_memory();
        insert_order(&conn, "x", "[]");
        assert!(delete_order(&conn, "x").unwrap());
        assert!(!delete_order(&conn, "x").unwrap());
    }
}
