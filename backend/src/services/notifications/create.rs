use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::model::notification::Notification;
use common::requests::CreateNotificationRequest;
use log::error;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;
use crate::services::notifications::kind_column;

/// `POST /api/notifications`.
pub async fn process(request: Json<CreateNotificationRequest>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match create_notification(&conn, &request) {
        Ok(notification) => HttpResponse::Created().json(notification),
        Err(e) => {
            error!("Error creando la notificación: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

pub(crate) fn create_notification(
    conn: &Connection,
    request: &CreateNotificationRequest,
) -> Result<Notification, String> {
    let notification = Notification {
        id: Uuid::new_v4().to_string(),
        user_id: request.user_id.clone(),
        title: request.title.clone(),
        message: request.message.clone(),
        kind: request.kind,
        is_read: false,
        action_url: request.action_url.clone(),
        created_at: db::now(),
    };
    conn.execute(
        "INSERT INTO notifications (id, user_id, title, message, type, \
         is_read, action_url, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7)",
        params![
            notification.id,
            notification.user_id,
            notification.title,
            notification.message,
            kind_column(notification.kind),
            notification.action_url,
            notification.created_at,
        ],
    )
    .map_err(|e| e.to_string())?;
    Ok(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::notification::NotificationKind;

    #[test]
    fn created_notification_starts_unread() {
        let conn = db::open_in_memory();
        let request = CreateNotificationRequest {
            user_id: "admin".into(),
            title: "Nueva orden".into(),
            message: "Llegó una orden".into(),
            kind: NotificationKind::Success,
            action_url: Some("/orders/abc".into()),
        };
        let notification = create_notification(&conn, &request).unwrap();
        assert!(!notification.is_read);
        let stored: i64 = conn
            .query_row(
                "SELECT is_read FROM notifications WHERE id = ?1",
                [&notification.id],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(stored, 0);
    }
}
