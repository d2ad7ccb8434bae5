use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use log::error;

use crate::db;
use crate::services::templates::{template_from_row, TEMPLATE_COLUMNS};

/// `GET /api/templates/{id}`.
pub async fn process(path: Path<String>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    let sql = format!("SELECT {} FROM email_templates WHERE id = ?1", TEMPLATE_COLUMNS);
    match conn.query_row(&sql, [&id], template_from_row) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            HttpResponse::NotFound().body("Plantilla no encontrada")
        }
        Err(e) => {
            error!("Error consultando la plantilla {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
    }
}
