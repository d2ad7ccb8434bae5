use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::model::settings::CompanySettings;
use log::{error, info};
use rusqlite::{params, Connection};

use crate::db;
use crate::services::company::{load_settings, SETTINGS_ID};

/// `PUT /api/company`. Replaces the singleton row with the posted settings;
/// id and creation time are never taken from the client.
pub async fn process(request: Json<CompanySettings>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match update_settings(&conn, &request) {
        Ok(settings) => {
            info!("Configuración de la empresa actualizada");
            HttpResponse::Ok().json(settings)
        }
        Err(e) => {
            error!("Error actualizando la configuración: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

pub(crate) fn update_settings(
    conn: &Connection,
    settings: &CompanySettings,
) -> Result<CompanySettings, String> {
    // Ensures the row exists so UPDATE always hits it.
    load_settings(conn)?;
    conn.execute(
        "UPDATE company_settings SET \
           company_name = ?1, company_logo = ?2, company_address = ?3, \
           company_phone = ?4, company_email = ?5, company_website = ?6, \
           smtp_host = ?7, smtp_port = ?8, smtp_user = ?9, smtp_password = ?10, \
           smtp_secure = ?11, backup_enabled = ?12, backup_frequency = ?13, \
           updated_at = ?14 \
         WHERE id = ?15",
        params![
            settings.company_name,
            settings.company_logo,
            settings.company_address,
            settings.company_phone,
            settings.company_email,
            settings.company_website,
            settings.smtp_host,
            settings.smtp_port as i64,
            settings.smtp_user,
            settings.smtp_password,
            settings.smtp_secure as i64,
            settings.backup_enabled as i64,
            settings.backup_frequency,
            db::now(),
            SETTINGS_ID,
        ],
    )
    .map_err(|e| e.to_string())?;
    load_settings(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_persists_and_keeps_server_fields() {
        let conn = db::open_in_memory();
        let created = load_settings(&conn).unwrap();
        let posted = CompanySettings {
            id: "forged-id".into(),
            company_name: "Traducciones Vega".into(),
            company_email: Some("contacto@vega.es".into()),
            smtp_host: Some("smtp.vega.es".into()),
            smtp_port: 465,
            smtp_secure: false,
            backup_enabled: true,
            backup_frequency: "weekly".into(),
            ..CompanySettings::default()
        };
        let saved = update_settings(&conn, &posted).unwrap();
        assert_eq!(saved.id, SETTINGS_ID);
        assert_eq!(saved.company_name, "Traducciones Vega");
        assert_eq!(saved.smtp_port, 465);
        assert!(!saved.smtp_secure);
        assert_eq!(saved.backup_frequency, "weekly");
        assert_eq!(saved.created_at, created.created_at);
    }
}
