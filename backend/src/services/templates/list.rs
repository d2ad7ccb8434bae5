use actix_web::{HttpResponse, Responder};
use common::model::template::EmailTemplate;
use log::error;
use rusqlite::Connection;

use crate::db;
use crate::services::templates::{template_from_row, TEMPLATE_COLUMNS};

/// `GET /api/templates`.
pub async fn process() -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match list_templates(&conn) {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => {
            error!("Error listando plantillas: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

fn list_templates(conn: &Connection) -> Result<Vec<EmailTemplate>, String> {
    let sql = format!(
        "SELECT {} FROM email_templates ORDER BY name ASC",
        TEMPLATE_COLUMNS
    );
    let mut stmt = conn.prepare(&sql).map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], template_from_row)
        .map_err(|e| e.to_string())?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::templates::save::tests::sample_template;
    use crate::services::templates::save::upsert_template;

    #[test]
    fn lists_templates_sorted_by_name() {
        let conn = db::open_in_memory();
        upsert_template(&conn, &sample_template("t1", "Zeta")).unwrap();
        upsert_template(&conn, &sample_template("t2", "Alfa")).unwrap();
        let templates = list_templates(&conn).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "Alfa");
    }
}
