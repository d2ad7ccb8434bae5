//! # Company Settings Service Module
//!
//! The settings table holds a single row (identity, SMTP, backup policy).
//! Besides get/update this module simulates an SMTP connection test and
//! produces manual JSON backups under the local storage bucket.

mod backup;
mod get;
mod smtp;
mod update;

use actix_web::web;
use actix_web::Scope;
use common::model::settings::CompanySettings;
use rusqlite::{params, Connection, Row};

use crate::db;

const API_PATH: &str = "/api/company";

/// Fixed row id; the table is a singleton.
pub(crate) const SETTINGS_ID: &str = "company";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(get::process))
        .route("", web::put().to(update::process))
        .route("/smtp/test", web::post().to(smtp::process))
        .route("/backup", web::post().to(backup::process))
        .route("/backup/schedule", web::post().to(backup::schedule))
}

pub(crate) const SETTINGS_COLUMNS: &str =
    "id, company_name, company_logo, company_address, company_phone, \
     company_email, company_website, smtp_host, smtp_port, smtp_user, \
     smtp_password, smtp_secure, backup_enabled, backup_frequency, \
     created_at, updated_at";

pub(crate) fn settings_from_row(row: &Row) -> rusqlite::Result<CompanySettings> {
    Ok(CompanySettings {
        id: row.get(0)?,
        company_name: row.get(1)?,
        company_logo: row.get(2)?,
        company_address: row.get(3)?,
        company_phone: row.get(4)?,
        company_email: row.get(5)?,
        company_website: row.get(6)?,
        smtp_host: row.get(7)?,
        smtp_port: row.get::<_, i64>(8)? as u16,
        smtp_user: row.get(9)?,
        smtp_password: row.get(10)?,
        smtp_secure: row.get::<_, i64>(11)? != 0,
        backup_enabled: row.get::<_, i64>(12)? != 0,
        backup_frequency: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

/// Loads the singleton row, creating it with defaults on first access.
pub(crate) fn load_settings(conn: &Connection) -> Result<CompanySettings, String> {
    let sql = format!(
        "SELECT {} FROM company_settings WHERE id = ?1",
        SETTINGS_COLUMNS
    );
    match conn.query_row(&sql, [SETTINGS_ID], settings_from_row) {
        Ok(settings) => Ok(settings),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            let now = db::now();
            conn.execute(
                "INSERT INTO company_settings (id, created_at, updated_at) \
                 VALUES (?1, ?2, ?2)",
                params![SETTINGS_ID, now],
            )
            .map_err(|e| e.to_string())?;
            conn.query_row(&sql, [SETTINGS_ID], settings_from_row)
                .map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_creates_the_singleton_with_defaults() {
        let conn = db::open_in_memory();
        let settings = load_settings(&conn).unwrap();
        assert_eq!(settings.id, SETTINGS_ID);
        assert_eq!(settings.smtp_port, 587);
        assert!(settings.smtp_secure);
        assert_eq!(settings.backup_frequency, "daily");
        // Second load reuses the same row.
        let again = load_settings(&conn).unwrap();
        assert_eq!(again.created_at, settings.created_at);
    }
}
