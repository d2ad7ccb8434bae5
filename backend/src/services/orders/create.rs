use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::requests::CreateOrderRequest;
use log::{error, info};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;
use crate::services::orders::{document_column_text, fetch_order};

/// `POST /api/orders`. The server assigns the id, the verification token
/// and both timestamps; the stored document columns are canonicalized.
pub async fn process(request: Json<CreateOrderRequest>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match create_order(&conn, &request) {
        Ok(order) => {
            info!("Orden creada: {}", order.id);
            HttpResponse::Created().json(order)
        }
        Err(e) => {
            error!("Error creando la orden: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn create_order(
    conn: &Connection,
    request: &CreateOrderRequest,
) -> Result<common::model::order::TranslationOrder, String> {
    let id = Uuid::new_v4().to_string();
    let token = Uuid::new_v4().to_string();
    let now = db::now();
    let archivos = document_column_text(&request.archivos_urls)?;
    conn.execute(
        "INSERT INTO solicitudes_traduccion \
         (id, nombre, correo, telefono, idioma_origen, idioma_destino, status, \
          tiempo_procesamiento, progress, internal_notes, fecha_solicitud, \
          created_at, updated_at, verification_token, archivos_urls, \
          docs_translated, document_type, word_count, estimated_delivery) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'nuevo', ?7, 0, '', ?8, ?8, ?8, ?9, \
                 ?10, '[]', ?11, ?12, ?13)",
        params![
            id,
            request.nombre,
            request.correo,
            request.telefono,
            request.idioma_origen,
            request.idioma_destino,
            request.tiempo_procesamiento,
            now,
            token,
            archivos,
            request.document_type,
            request.word_count,
            request.estimated_delivery,
        ],
    )
    .map_err(|e| e.to_string())?;
    fetch_order(conn, &id)?.ok_or_else(|| "La orden recién creada no existe".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::documents::DocumentField;

    fn sample_request() -> CreateOrderRequest {
        CreateOrderRequest {
            nombre: "Luis Pérez".into(),
            correo: "luis@test.com".into(),
            telefono: String::new(),
            idioma_origen: "Español".into(),
            idioma_destino: "Francés".into(),
            tiempo_procesamiento: 5,
            archivos_urls: DocumentField::Single("http://files/origen.pdf".into()),
            document_type: None,
            word_count: Some(1200),
            estimated_delivery: None,
        }
    }

    #[test]
    fn creates_order_with_server_assigned_fields() {
        let conn = db::open_in_memory();
        let order = create_order(&conn, &sample_request()).unwrap();
        assert_eq!(order.status, "nuevo");
        assert_eq!(order.progress, 0);
        assert!(!order.verification_token.is_empty());
        assert_ne!(order.id, order.verification_token);
        assert_eq!(
            order.archivos_urls.normalize(),
            vec!["http://files/origen.pdf"]
        );
        assert!(order.docs_translated.normalize().is_empty());
    }

    #[test]
    fn two_orders_get_distinct_tokens() {
        let conn = db::open_in_memory();
        let a = create_order(&conn, &sample_request()).unwrap();
        let b = create_order(&conn, &sample_request()).unwrap();
        assert_ne!(a.verification_token, b.verification_token);
    }
}
