use actix_web::{HttpResponse, Responder};
use log::error;

use crate::db;
use crate::services::company::load_settings;

/// `GET /api/company`.
pub async fn process() -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match load_settings(&conn) {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => {
            error!("Error cargando la configuración: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}
