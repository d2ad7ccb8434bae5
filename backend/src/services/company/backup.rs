use std::fs;
use std::path::Path as FsPath;

use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::model::notification::NotificationKind;
use common::model::profile::UserProfile;
use common::requests::{BackupResponse, CreateNotificationRequest, ScheduleBackupRequest};
use log::{error, info};
use md5::Context;
use rusqlite::{params, Connection};
use serde_json::{json, Value};

use crate::db;
use crate::services::company::SETTINGS_ID;
use crate::services::notifications::create::create_notification;
use crate::services::notifications::{notification_from_row, NOTIFICATION_COLUMNS};
use crate::services::orders::{order_from_row, ORDER_COLUMNS};
use crate::services::templates::{template_from_row, TEMPLATE_COLUMNS};

const BACKUP_BUCKET: &str = "backups";

const FREQUENCIES: [&str; 3] = ["daily", "weekly", "monthly"];

/// `POST /api/company/backup`. Dumps every data table to a JSON file under
/// the backups bucket and answers with its public URL and md5 digest. The
/// dump reads every table and writes the file, so it runs on the blocking
/// pool.
pub async fn process() -> impl Responder {
    let result = tokio::task::spawn_blocking(|| {
        let conn = db::open()?;
        run_backup(&conn)
    })
    .await
    .unwrap_or_else(|e| Err(e.to_string()));
    match result {
        Ok(response) => {
            info!("Respaldo generado: {}", response.url);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            error!("Error generando el respaldo: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

/// `POST /api/company/backup/schedule`. Stores the frequency and enables
/// scheduled backups.
pub async fn schedule(request: Json<ScheduleBackupRequest>) -> impl Responder {
    if !FREQUENCIES.contains(&request.frequency.as_str()) {
        return HttpResponse::BadRequest().body("Frecuencia inválida. Use daily, weekly o monthly");
    }
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match schedule_backup(&conn, &request.frequency) {
        Ok(_) => {
            info!("Respaldo programado: {}", request.frequency);
            HttpResponse::Ok().finish()
        }
        Err(e) => {
            error!("Error programando el respaldo: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn dump_table<T: serde::Serialize>(
    conn: &Connection,
    sql: &str,
    from_row: fn(&rusqlite::Row) -> rusqlite::Result<T>,
) -> Result<Value, String> {
    let mut stmt = conn.prepare(sql).map_err(|e| e.to_string())?;
    let rows = stmt.query_map([], from_row).map_err(|e| e.to_string())?;
    let items = rows
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| e.to_string())?;
    serde_json::to_value(items).map_err(|e| e.to_string())
}

pub(crate) fn build_dump(conn: &Connection) -> Result<Value, String> {
    Ok(json!({
        "generated_at": db::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "orders": dump_table(
            conn,
            &format!("SELECT {} FROM solicitudes_traduccion", ORDER_COLUMNS),
            order_from_row,
        )?,
        "templates": dump_table(
            conn,
            &format!("SELECT {} FROM email_templates", TEMPLATE_COLUMNS),
            template_from_row,
        )?,
        "notifications": dump_table(
            conn,
            &format!("SELECT {} FROM notifications", NOTIFICATION_COLUMNS),
            notification_from_row,
        )?,
        "profiles": dump_table(
            conn,
            "SELECT id, user_id, full_name, avatar_url, phone, department, \
             role, is_active, last_login, created_at, updated_at \
             FROM user_profiles",
            profile_from_row,
        )?,
    }))
}

fn profile_from_row(row: &rusqlite::Row) -> rusqlite::Result<UserProfile> {
    Ok(UserProfile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        full_name: row.get(2)?,
        avatar_url: row.get(3)?,
        phone: row.get(4)?,
        department: row.get(5)?,
        role: row.get(6)?,
        is_active: row.get::<_, i64>(7)? != 0,
        last_login: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn run_backup(conn: &Connection) -> Result<BackupResponse, String> {
    let dump = build_dump(conn)?;
    let bytes = serde_json::to_vec_pretty(&dump).map_err(|e| e.to_string())?;

    let mut hasher = Context::new();
    hasher.consume(&bytes);
    let md5 = format!("{:x}", hasher.finalize());

    let bucket = FsPath::new(db::STORAGE_DIR).join(BACKUP_BUCKET);
    fs::create_dir_all(&bucket).map_err(|e| e.to_string())?;
    let name = format!("backup-{}.json", chrono::Utc::now().format("%Y%m%d-%H%M%S"));
    fs::write(bucket.join(&name), &bytes).map_err(|e| e.to_string())?;

    let response = BackupResponse {
        url: format!("/files/{}/{}", BACKUP_BUCKET, name),
        md5,
    };
    create_notification(
        conn,
        &CreateNotificationRequest {
            user_id: "admin".to_string(),
            title: "Respaldo completado".to_string(),
            message: format!("Se generó el archivo {}", name),
            kind: NotificationKind::Success,
            action_url: Some(response.url.clone()),
        },
    )?;
    Ok(response)
}

fn schedule_backup(conn: &Connection, frequency: &str) -> Result<(), String> {
    crate::services::company::load_settings(conn)?;
    conn.execute(
        "UPDATE company_settings SET backup_enabled = 1, backup_frequency = ?1, \
         updated_at = ?2 WHERE id = ?3",
        params![frequency, db::now(), SETTINGS_ID],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::company::load_settings;
    use crate::services::notifications::tests::insert_notification;
    use crate::services::orders::tests::insert_order;

    #[test]
    fn dump_covers_all_tables() {
        let conn = db::open_in_memory();
        insert_order(&conn, "o1", "[]");
        insert_notification(&conn, "n1", "2026-01-01T00:00:00Z");
        let dump = build_dump(&conn).unwrap();
        assert_eq!(dump["orders"].as_array().unwrap().len(), 1);
        assert_eq!(dump["notifications"].as_array().unwrap().len(), 1);
        assert!(dump["templates"].as_array().unwrap().is_empty());
        // The seeded admin profile is always present.
        assert_eq!(dump["profiles"].as_array().unwrap().len(), 1);
        assert!(dump["generated_at"].is_string());
        assert_eq!(
            dump["version"].as_str().unwrap(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn backup_leaves_a_success_notification() {
        let conn = db::open_in_memory();
        insert_order(&conn, "o1", "[]");
        let response = run_backup(&conn).unwrap();
        let (kind, action_url): (String, String) = conn
            .query_row(
                "SELECT type, action_url FROM notifications \
                 WHERE title = 'Respaldo completado'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(kind, "success");
        assert_eq!(action_url, response.url);
    }

    #[test]
    fn scheduling_enables_backups_with_the_frequency() {
        let conn = db::open_in_memory();
        schedule_backup(&conn, "weekly").unwrap();
        let settings = load_settings(&conn).unwrap();
        assert!(settings.backup_enabled);
        assert_eq!(settings.backup_frequency, "weekly");
    }
}
