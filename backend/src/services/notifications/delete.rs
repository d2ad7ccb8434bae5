use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use log::error;

use crate::db;

/// `DELETE /api/notifications/{id}`.
pub async fn process(path: Path<String>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match conn.execute("DELETE FROM notifications WHERE id = ?1", [&id]) {
        Ok(0) => HttpResponse::NotFound().body("Notificación no encontrada"),
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => {
            error!("Error eliminando la notificación {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
    }
}
