use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::model::template::EmailTemplate;
use log::{error, info};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db;
use crate::services::templates::{template_from_row, TEMPLATE_COLUMNS};

/// `POST /api/templates/save`. Creates the template when the posted id is
/// empty, otherwise replaces the stored row.
pub async fn process(request: Json<EmailTemplate>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    match upsert_template(&conn, &request) {
        Ok(template) => {
            info!("Plantilla guardada: {} ({})", template.name, template.id);
            HttpResponse::Ok().json(template)
        }
        Err(e) => {
            error!("Error guardando la plantilla: {}", e);
            HttpResponse::ServiceUnavailable().body(e)
        }
    }
}

pub(crate) fn upsert_template(
    conn: &Connection,
    template: &EmailTemplate,
) -> Result<EmailTemplate, String> {
    let id = if template.id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        template.id.clone()
    };
    let now = db::now();
    let variables = serde_json::to_string(&template.variables).map_err(|e| e.to_string())?;
    conn.execute(
        "INSERT INTO email_templates \
         (id, name, type, subject, html_content, text_content, variables, \
          is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) \
         ON CONFLICT(id) DO UPDATE SET \
           name = excluded.name, type = excluded.type, \
           subject = excluded.subject, html_content = excluded.html_content, \
           text_content = excluded.text_content, variables = excluded.variables, \
           is_active = excluded.is_active, updated_at = excluded.updated_at",
        params![
            id,
            template.name,
            template.kind,
            template.subject,
            template.html_content,
            template.text_content,
            variables,
            template.is_active as i64,
            now,
        ],
    )
    .map_err(|e| e.to_string())?;

    let sql = format!("SELECT {} FROM email_templates WHERE id = ?1", TEMPLATE_COLUMNS);
    conn.query_row(&sql, [&id], template_from_row)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_template(id: &str, name: &str) -> EmailTemplate {
        EmailTemplate {
            id: id.to_string(),
            name: name.to_string(),
            kind: "order_created".to_string(),
            subject: "Su orden #{order_id}".to_string(),
            html_content: "<p>Hola #{client_name}</p>".to_string(),
            text_content: "Hola #{client_name}".to_string(),
            variables: vec!["client_name".to_string(), "order_id".to_string()],
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn empty_id_creates_a_new_template() {
        let conn = db::open_in_memory();
        let saved = upsert_template(&conn, &sample_template("", "Bienvenida")).unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.name, "Bienvenida");
        assert!(!saved.created_at.is_empty());
    }

    #[test]
    fn existing_id_replaces_the_row() {
        let conn = db::open_in_memory();
        let first = upsert_template(&conn, &sample_template("t1", "Original")).unwrap();
        let mut edited = sample_template("t1", "Editada");
        edited.is_active = false;
        let second = upsert_template(&conn, &edited).unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.name, "Editada");
        assert!(!second.is_active);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM email_templates", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn variables_round_trip_through_the_column() {
        let conn = db::open_in_memory();
        let saved = upsert_template(&conn, &sample_template("t1", "Con variables")).unwrap();
        assert_eq!(saved.variables, vec!["client_name", "order_id"]);
    }
}
