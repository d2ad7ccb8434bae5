//! # Email Templates Service Module
//!
//! CRUD over the template table plus the `#{variable}` preview endpoint the
//! editor uses. Substitution itself lives in the shared model crate so the
//! editor can preview locally with the same code.

mod delete;
mod get;
mod list;
mod preview;
mod save;

use actix_web::web;
use actix_web::Scope;
use common::model::template::EmailTemplate;
use rusqlite::Row;

const API_PATH: &str = "/api/templates";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("/save", web::post().to(save::process))
        .route("/preview", web::post().to(preview::process))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::delete().to(delete::process))
}

pub(crate) const TEMPLATE_COLUMNS: &str =
    "id, name, type, subject, html_content, text_content, variables, \
     is_active, created_at, updated_at";

pub(crate) fn template_from_row(row: &Row) -> rusqlite::Result<EmailTemplate> {
    let variables: String = row.get(6)?;
    Ok(EmailTemplate {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        subject: row.get(3)?,
        html_content: row.get(4)?,
        text_content: row.get(5)?,
        variables: serde_json::from_str(&variables).unwrap_or_default(),
        is_active: row.get::<_, i64>(7)? != 0,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}
