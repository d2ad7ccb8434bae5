use actix_web::web::Json;
use actix_web::{HttpResponse, Responder};
use common::model::settings::CompanySettings;
use common::requests::{SmtpTestRequest, SmtpTestResult};
use log::{error, info};

use crate::db;
use crate::services::company::load_settings;

/// `POST /api/company/smtp/test`. No mail is sent; the check validates the
/// effective settings (posted values over stored ones) and reports the
/// first problem found in the form's field order.
pub async fn process(request: Json<SmtpTestRequest>) -> impl Responder {
    let conn = match db::open() {
        Ok(conn) => conn,
        Err(e) => {
            error!("No se pudo abrir la base de datos: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    let stored = match load_settings(&conn) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Error cargando la configuración: {}", e);
            return HttpResponse::ServiceUnavailable().body(e);
        }
    };
    let result = check_settings(&request, &stored);
    if result.success {
        info!("Prueba SMTP correcta");
    }
    HttpResponse::Ok().json(result)
}

fn effective(posted: Option<&String>, stored: Option<&String>) -> String {
    posted
        .or(stored)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

pub(crate) fn check_settings(
    request: &SmtpTestRequest,
    stored: &CompanySettings,
) -> SmtpTestResult {
    let host = effective(request.smtp_host.as_ref(), stored.smtp_host.as_ref());
    let user = effective(request.smtp_user.as_ref(), stored.smtp_user.as_ref());
    let password = effective(request.smtp_password.as_ref(), stored.smtp_password.as_ref());
    let port = request.smtp_port.unwrap_or(stored.smtp_port);

    let error = if host.is_empty() {
        Some("Falta el servidor SMTP".to_string())
    } else if port == 0 {
        Some("Puerto SMTP inválido".to_string())
    } else if user.is_empty() {
        Some("Falta el usuario SMTP".to_string())
    } else if !looks_like_email(&user) {
        Some("El usuario SMTP debe ser un correo válido".to_string())
    } else if password.is_empty() {
        Some("Falta la contraseña SMTP".to_string())
    } else {
        provider_port_hint(&host, port)
    };
    SmtpTestResult {
        success: error.is_none(),
        error,
    }
}

fn looks_like_email(user: &str) -> bool {
    match user.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// The common providers only accept STARTTLS submission on 587; catching
/// that here saves a confusing timeout later.
fn provider_port_hint(host: &str, port: u16) -> Option<String> {
    let host = host.to_lowercase();
    let known = host.contains("gmail") || host.contains("outlook") || host.contains("office365");
    if known && port != 587 {
        Some(format!(
            "El proveedor de {} requiere el puerto 587",
            host
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SmtpTestRequest {
        SmtpTestRequest {
            smtp_host: Some("smtp.test.com".into()),
            smtp_port: Some(587),
            smtp_user: Some("envios@test.com".into()),
            smtp_password: Some("secreto".into()),
            smtp_secure: Some(true),
        }
    }

    #[test]
    fn complete_settings_pass() {
        let result = check_settings(&full_request(), &CompanySettings::default());
        assert!(result.success);
        assert!(result.error.is_none());
    }

    #[test]
    fn each_missing_field_reports_its_own_error() {
        let stored = CompanySettings::default();
        let cases: [(fn(&mut SmtpTestRequest), &str); 5] = [
            (|r| r.smtp_host = None, "Falta el servidor SMTP"),
            (|r| r.smtp_port = Some(0), "Puerto SMTP inválido"),
            (|r| r.smtp_user = Some("  ".into()), "Falta el usuario SMTP"),
            (
                |r| r.smtp_user = Some("sin-arroba".into()),
                "El usuario SMTP debe ser un correo válido",
            ),
            (|r| r.smtp_password = None, "Falta la contraseña SMTP"),
        ];
        for (break_field, expected) in cases {
            let mut request = full_request();
            break_field(&mut request);
            let result = check_settings(&request, &stored);
            assert!(!result.success);
            assert_eq!(result.error.as_deref(), Some(expected));
        }
    }

    #[test]
    fn stored_settings_fill_missing_posted_fields() {
        let stored = CompanySettings {
            smtp_host: Some("smtp.guardado.es".into()),
            smtp_user: Some("usuario@guardado.es".into()),
            smtp_password: Some("clave".into()),
            ..CompanySettings::default()
        };
        let result = check_settings(&SmtpTestRequest::default(), &stored);
        assert!(result.success);
    }

    #[test]
    fn known_providers_require_port_587() {
        let mut request = full_request();
        request.smtp_host = Some("smtp.gmail.com".into());
        request.smtp_port = Some(465);
        let result = check_settings(&request, &CompanySettings::default());
        assert!(!result.success);
        assert!(result.error.unwrap().contains("587"));

        request.smtp_port = Some(587);
        assert!(check_settings(&request, &CompanySettings::default()).success);
    }
}
