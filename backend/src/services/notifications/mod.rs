//! # Notifications Service Module
//!
//! Backs the bell dropdown in the header: listing recent notifications,
//! marking one or all as read, creating internal notices, and deleting.

pub(crate) mod create;
mod delete;
mod list;
mod mark_all_read;
mod mark_read;

use actix_web::web;
use actix_web::Scope;
use common::model::notification::{Notification, NotificationKind};
use rusqlite::Row;

const API_PATH: &str = "/api/notifications";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(create::process))
        .route("/read-all", web::put().to(mark_all_read::process))
        .route("/{id}/read", web::put().to(mark_read::process))
        .route("/{id}", web::delete().to(delete::process))
}

pub(crate) const NOTIFICATION_COLUMNS: &str =
    "id, user_id, title, message, type, is_read, action_url, created_at";

pub(crate) fn notification_from_row(row: &Row) -> rusqlite::Result<Notification> {
    let kind: String = row.get(4)?;
    Ok(Notification {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        message: row.get(3)?,
        kind: match kind.as_str() {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        },
        is_read: row.get::<_, i64>(5)? != 0,
        action_url: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub(crate) fn kind_column(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "info",
        NotificationKind::Success => "success",
        NotificationKind::Warning => "warning",
        NotificationKind::Error => "error",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rusqlite::{params, Connection};

    pub(crate) fn insert_notification(conn: &Connection, id: &str, created_at: &str) {
        conn.execute(
            "INSERT INTO notifications (id, user_id, title, message, type, \
             is_read, created_at) \
             VALUES (?1, 'admin', 'Aviso', 'Mensaje', 'info', 0, ?2)",
            params![id, created_at],
        )
        .expect("insert notification");
    }
}
