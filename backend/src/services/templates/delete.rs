use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use log::{error, info};

use crate::db;

/// `DELETE /api/templates/{id}`.
pub async fn process(path: Path<String>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match conn.execute("DELETE FROM email_templates WHERE id = ?1", [&id]) {
        Ok(0) => HttpResponse::NotFound().body("Plantilla no encontrada"),
        Ok(_) => {
            info!("Plantilla eliminada: {}", id);
            HttpResponse::Ok().finish()
        }
        Err(e) => {
            error!("Error eliminando la plantilla {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
    }
}
