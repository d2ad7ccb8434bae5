use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use log::error;

use crate::db;
use crate::services::orders::fetch_order;

/// `GET /api/orders/{id}`.
pub async fn process(path: Path<String>) -> impl Responder {
    let id = path.into_inner();
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match fetch_order(&conn, &id) {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => HttpResponse::NotFound().body("Orden no encontrada"),
        Err(e) => {
            error!("Error consultando la orden {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}
