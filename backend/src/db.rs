//! SQLite access for the console.
//!
//! Connections are opened per operation against a fixed database file; the
//! schema is created once at startup so handlers never race table creation.

use rusqlite::Connection;

/// Database file next to the server binary.
pub const DB_PATH: &str = "traducciones.sqlite";

/// Root of the local object storage served under `/files`.
pub const STORAGE_DIR: &str = "./storage";

/// Bucket for uploaded translated documents.
pub const TRANSLATED_BUCKET: &str = "translated-documents";

pub fn open() -> Result<Connection, String> {
    Connection::open(DB_PATH).map_err(|e| e.to_string())
}

pub fn init() -> Result<(), String> {
    let conn = open()?;
    init_schema(&conn)
}

/// Creates all tables if missing. Split out so tests can run against an
/// in-memory connection.
pub fn init_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS solicitudes_traduccion (
            id TEXT PRIMARY KEY,
            nombre TEXT NOT NULL,
            correo TEXT NOT NULL,
            telefono TEXT NOT NULL DEFAULT '',
            idioma_origen TEXT NOT NULL,
            idioma_destino TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'nuevo',
            tiempo_procesamiento INTEGER NOT NULL DEFAULT 3,
            progress INTEGER NOT NULL DEFAULT 0,
            internal_notes TEXT NOT NULL DEFAULT '',
            fecha_solicitud TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            verification_token TEXT NOT NULL UNIQUE,
            archivos_urls TEXT,
            docs_translated TEXT,
            document_type TEXT,
            word_count INTEGER,
            estimated_delivery TEXT
        );
        CREATE TABLE IF NOT EXISTS email_templates (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            subject TEXT NOT NULL DEFAULT '',
            html_content TEXT NOT NULL DEFAULT '',
            text_content TEXT NOT NULL DEFAULT '',
            variables TEXT NOT NULL DEFAULT '[]',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS notifications (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            type TEXT NOT NULL DEFAULT 'info',
            is_read INTEGER NOT NULL DEFAULT 0,
            action_url TEXT,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS company_settings (
            id TEXT PRIMARY KEY,
            company_name TEXT NOT NULL DEFAULT '',
            company_logo TEXT,
            company_address TEXT,
            company_phone TEXT,
            company_email TEXT,
            company_website TEXT,
            smtp_host TEXT,
            smtp_port INTEGER NOT NULL DEFAULT 587,
            smtp_user TEXT,
            smtp_password TEXT,
            smtp_secure INTEGER NOT NULL DEFAULT 1,
            backup_enabled INTEGER NOT NULL DEFAULT 0,
            backup_frequency TEXT NOT NULL DEFAULT 'daily',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS user_profiles (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL UNIQUE,
            full_name TEXT NOT NULL DEFAULT '',
            avatar_url TEXT,
            phone TEXT,
            department TEXT,
            role TEXT NOT NULL DEFAULT 'staff',
            is_active INTEGER NOT NULL DEFAULT 1,
            last_login TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )
    .map_err(|e| e.to_string())?;
    seed_admin_profile(conn)
}

/// The console runs single-operator; notifications and edits are attributed
/// to this profile.
fn seed_admin_profile(conn: &Connection) -> Result<(), String> {
    let ts = now();
    conn.execute(
        "INSERT OR IGNORE INTO user_profiles \
         (id, user_id, full_name, role, is_active, created_at, updated_at) \
         VALUES ('admin', 'admin', 'Administración', 'admin', 1, ?1, ?1)",
        [&ts],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}

/// RFC 3339 timestamp for row bookkeeping.
pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
pub fn open_in_memory() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory db");
    init_schema(&conn).expect("schema");
    conn
}
