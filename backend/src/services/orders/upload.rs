use std::fs;
use std::path::Path as FsPath;
use std::time::{SystemTime, UNIX_EPOCH};

use actix_multipart::Multipart;
use actix_web::web::Path;
use actix_web::{HttpResponse, Responder};
use common::requests::UploadResponse;
use futures_util::StreamExt;
use log::{error, info};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;
use crate::services::orders::fetch_order;

/// Upload cap for a translated document.
const MAX_FILE_BYTES: usize = 50 * 1024 * 1024;

/// Extensions accepted for translated documents.
const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// `POST /api/orders/{id}/documents`. Stores one translated document under
/// the local bucket and appends its public URL to the order.
pub async fn process(path: Path<String>, mut payload: Multipart) -> impl Responder {
    let id = path.into_inner();

    let mut file_name = String::new();
    let mut bytes: Vec<u8> = Vec::new();
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                error!("Error leyendo el multipart: {}", e);
                return HttpResponse::BadRequest().body("Archivo inválido");
            }
        };
        if let Some(name) = field.content_disposition().and_then(|cd| cd.get_filename()) {
            file_name = name.to_string();
        }
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    error!("Error leyendo el archivo subido: {}", e);
                    return HttpResponse::BadRequest().body("Archivo inválido");
                }
            };
            if bytes.len() + chunk.len() > MAX_FILE_BYTES {
                return HttpResponse::PayloadTooLarge()
                    .body("El archivo no debe superar 50MB");
            }
            bytes.extend_from_slice(&chunk);
        }
    }

    if let Err(reason) = validate_upload(&file_name, bytes.len()) {
        return HttpResponse::BadRequest().body(reason);
    }

    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match store_document(&conn, &id, &file_name, &bytes) {
        Ok(Some(response)) => {
            info!("Documento subido para la orden {}: {}", id, response.url);
            HttpResponse::Ok().json(response)
        }
        Ok(None) => HttpResponse::NotFound().body("Orden no encontrada"),
        Err(e) => {
            error!("Error guardando el documento de la orden {}: {}", id, e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

/// Name and size checks shared with nothing else; kept as a plain function
/// so the rejection matrix is testable without a multipart stream.
fn validate_upload(file_name: &str, size: usize) -> Result<(), String> {
    if file_name.is_empty() || size == 0 {
        return Err("No se recibió ningún archivo".to_string());
    }
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Tipo de archivo no permitido. Use PDF, DOC, DOCX o TXT".to_string());
    }
    if size > MAX_FILE_BYTES {
        return Err("El archivo no debe superar 50MB".to_string());
    }
    Ok(())
}

/// Key layout is `<millis>-<uuid>-<original name>` so the original name can
/// be recovered by stripping the generated prefix.
fn storage_key(file_name: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{}-{}-{}", millis, Uuid::new_v4(), file_name)
}

fn store_document(
    conn: &Connection,
    id: &str,
    file_name: &str,
    bytes: &[u8],
) -> Result<Option<UploadResponse>, String> {
    let Some(order) = fetch_order(conn, id)? else {
        return Ok(None);
    };

    let key = storage_key(file_name);
    let bucket = FsPath::new(db::STORAGE_DIR).join(db::TRANSLATED_BUCKET);
    fs::create_dir_all(&bucket).map_err(|e| e.to_string())?;
    fs::write(bucket.join(&key), bytes).map_err(|e| e.to_string())?;

    let url = format!("/files/{}/{}", db::TRANSLATED_BUCKET, key);
    let mut docs = order.docs_translated.normalize();
    docs.push(url.clone());
    let column = serde_json::to_string(&docs).map_err(|e| e.to_string())?;
    conn.execute(
        "UPDATE solicitudes_traduccion SET docs_translated = ?1, updated_at = ?2 \
         WHERE id = ?3",
        params![column, db::now(), id],
    )
    .map_err(|e| e.to_string())?;

    Ok(Some(UploadResponse {
        url,
        docs_translated: docs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whitelisted_extensions() {
        for name in ["a.pdf", "b.DOC", "c.docx", "d.txt"] {
            assert!(validate_upload(name, 10).is_ok(), "{} rechazado", name);
        }
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["foto.png", "script.exe", "sin_extension"] {
            assert!(validate_upload(name, 10).is_err(), "{} aceptado", name);
        }
    }

    #[test]
    fn rejects_empty_and_oversized_files() {
        assert!(validate_upload("a.pdf", 0).is_err());
        assert!(validate_upload("a.pdf", MAX_FILE_BYTES + 1).is_err());
        assert!(validate_upload("a.pdf", MAX_FILE_BYTES).is_ok());
    }

    #[test]
    fn storage_key_keeps_the_original_name_as_suffix() {
        let key = storage_key("contrato firmado.pdf");
        assert!(key.ends_with("-contrato firmado.pdf"));
    }
}
