use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use log::error;
use rusqlite::Connection;

use crate::db;

/// `PUT /api/notifications/{id}/read`.
pub async fn process(path: Path<String>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match mark_read(&conn, &id) {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => HttpResponse::NotFound().body("Notificación no encontrada"),
        Err(e) => {
            error!("Error marcando la notificación {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

pub(crate) fn mark_read(conn: &Connection, id: &str) -> Result<bool, String> {
    conn.execute("UPDATE notifications SET is_read = 1 WHERE id = ?1", [id])
        .map(|changed| changed > 0)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::tests::insert_notification;

    #[test]
    fn marking_read_is_idempotent() {
        let conn = db::open_in_memory();
        insert_notification(&conn, "n1", "2026-01-01T00:00:00Z");
        assert!(mark_read(&conn, "n1").unwrap());
        assert!(mark_read(&conn, "n1").unwrap());
        let is_read: i64 = conn
            .query_row("SELECT is_read FROM notifications WHERE id = 'n1'", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(is_read, 1);
    }

    #[test]
    fn missing_notification_reports_false() {
        let conn = db::open_in_memory();
        assert!(!mark_read(&conn, "nada").unwrap());
    }
}
