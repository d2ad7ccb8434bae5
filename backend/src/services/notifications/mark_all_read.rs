use actix_web::{HttpResponse, Responder};
use log::error;
use rusqlite::Connection;

use crate::db;

/// `PUT /api/notifications/read-all`.
pub async fn process() -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match mark_all_read(&conn) {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => {
            error!("Error marcando todas las notificaciones: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn mark_all_read(conn: &Connection) -> Result<usize, String> {
    conn.execute("UPDATE notifications SET is_read = 1 WHERE is_read = 0", [])
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::tests::insert_notification;

    #[test]
    fn marks_only_unread_rows() {
        let conn = db::open_in_memory();
        insert_notification(&conn, "n1", "2026-01-01T00:00:00Z");
        insert_notification(&conn, "n2", "2026-01-02T00:00:00Z");
        assert_eq!(mark_all_read(&conn).unwrap(), 2);
        assert_eq!(mark_all_read(&conn).unwrap(), 0);
    }
}
