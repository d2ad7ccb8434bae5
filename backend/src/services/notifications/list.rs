use actix_web::web::Query;
use actix_web::{HttpResponse, Responder};
use common::model::notification::Notification;
use log::error;
use rusqlite::Connection;
use serde::Deserialize;

use crate::db;
use crate::services::notifications::{notification_from_row, NOTIFICATION_COLUMNS};

/// Dropdown shows at most this many entries.
const LIST_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `GET /api/notifications[?user_id=...]`. Newest first, capped for the
/// dropdown; optionally scoped to one user.
pub async fn process(query: Query<ListQuery>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match list_notifications(&conn, query.user_id.as_deref()) {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(e) => {
            error!("Error listando notificaciones: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn list_notifications(
    conn: &Connection,
    user_id: Option<&str>,
) -> Result<Vec<Notification>, String> {
    let rows = match user_id {
        Some(user_id) => {
            let sql = format!(
                "SELECT {} FROM notifications WHERE user_id = ?1 \
                 ORDER BY created_at DESC LIMIT {}",
                NOTIFICATION_COLUMNS, LIST_LIMIT
            );
            let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
            let rows = stmt
                .query_map([user_id], notification_from_row)
                .map_err(|e| e.to_string())?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        }
        None => {
            let sql = format!(
                "SELECT {} FROM notifications ORDER BY created_at DESC LIMIT {}",
                NOTIFICATION_COLUMNS, LIST_LIMIT
            );
            let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
            let rows = stmt
                .query_map([], notification_from_row)
                .map_err(|e| e.to_string())?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        }
    };
    rows.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::tests::insert_notification;
    use rusqlite::params;

    #[test]
    fn lists_newest_first() {
        let conn = db::open_in_memory();
        insert_notification(&conn, "n1", "2026-01-01T00:00:00Z");
        insert_notification(&conn, "n2", "2026-02-01T00:00:00Z");
        let notifications = list_notifications(&conn, None).unwrap();
        assert_eq!(notifications[0].id, "n2");
        assert_eq!(notifications[1].id, "n1");
    }

    #[test]
    fn user_scope_filters_rows() {
        let conn = db::open_in_memory();
        insert_notification(&conn, "n1", "2026-01-01T00:00:00Z");
        conn.execute(
            "UPDATE notifications SET user_id = 'otra' WHERE id = 'n1'",
            params![],
        )
        .unwrap();
        insert_notification(&conn, "n2", "2026-01-02T00:00:00Z");
        let scoped = list_notifications(&conn, Some("admin")).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, "n2");
    }
}
