use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::settings::CompanySettings;
use common::requests::{
    BackupResponse, ScheduleBackupRequest, SmtpTestRequest, SmtpTestResult,
};

use crate::components::feedback::show_toast;

use super::messages::Msg;
use super::state::CompanyPage;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub fn update(component: &mut CompanyPage, ctx: &Context<CompanyPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetSettings(settings) => {
            component.settings = Some(settings);
            true
        }
        Msg::SetField(field, value) => {
            let Some(settings) = component.settings.as_mut() else {
                return false;
            };
            match field {
                "company_name" => settings.company_name = value,
                "company_address" => settings.company_address = optional(value),
                "company_phone" => settings.company_phone = optional(value),
                "company_email" => settings.company_email = optional(value),
                "company_website" => settings.company_website = optional(value),
                "smtp_host" => settings.smtp_host = optional(value),
                "smtp_port" => {
                    settings.smtp_port = value.trim().parse().unwrap_or(587);
                }
                "smtp_user" => settings.smtp_user = optional(value),
                "smtp_password" => settings.smtp_password = optional(value),
                _ => {}
            }
            true
        }
        Msg::SetSmtpSecure(secure) => {
            if let Some(settings) = component.settings.as_mut() {
                settings.smtp_secure = secure;
            }
            true
        }
        Msg::SetBackupFrequency(frequency) => {
            if let Some(settings) = component.settings.as_mut() {
                settings.backup_frequency = frequency;
            }
            true
        }
        Msg::Save => {
            let Some(settings) = component.settings.clone() else {
                return false;
            };
            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::put("/api/company")
                    .json(&settings)
                    .expect("serializable settings")
                    .send()
                    .await;
                let saved = match response {
                    Ok(resp) if resp.status() == 200 => {
                        resp.json::<CompanySettings>().await.ok()
                    }
                    _ => None,
                };
                link.send_message(Msg::SaveFinished(saved));
            });
            true
        }
        Msg::SaveFinished(saved) => {
            component.saving = false;
            match saved {
                Some(settings) => {
                    component.settings = Some(settings);
                    show_toast("Configuración guardada.");
                }
                None => show_toast("Error guardando la configuración."),
            }
            true
        }
        Msg::TestSmtp => {
            let Some(settings) = &component.settings else {
                return false;
            };
            component.testing_smtp = true;
            let request = SmtpTestRequest {
                smtp_host: settings.smtp_host.clone(),
                smtp_port: Some(settings.smtp_port),
                smtp_user: settings.smtp_user.clone(),
                smtp_password: settings.smtp_password.clone(),
                smtp_secure: Some(settings.smtp_secure),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::post("/api/company/smtp/test")
                    .json(&request)
                    .expect("serializable request")
                    .send()
                    .await;
                let result = match response {
                    Ok(resp) if resp.status() == 200 => {
                        resp.json::<SmtpTestResult>().await.ok()
                    }
                    _ => None,
                };
                link.send_message(Msg::SmtpTested(result));
            });
            true
        }
        Msg::SmtpTested(result) => {
            component.testing_smtp = false;
            match result {
                Some(result) if result.success => show_toast("Conexión SMTP correcta."),
                Some(result) => show_toast(
                    &result.error.unwrap_or_else(|| "Prueba SMTP fallida.".to_string()),
                ),
                None => show_toast("Error ejecutando la prueba SMTP."),
            }
            true
        }
        Msg::RunBackup => {
            component.backing_up = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::post("/api/company/backup").send().await;
                let backup = match response {
                    Ok(resp) if resp.status() == 200 => {
                        resp.json::<BackupResponse>().await.ok()
                    }
                    _ => None,
                };
                link.send_message(Msg::BackupFinished(backup));
            });
            true
        }
        Msg::BackupFinished(backup) => {
            component.backing_up = false;
            match backup {
                Some(backup) => {
                    component.last_backup = Some(backup);
                    show_toast("Respaldo generado.");
                }
                None => show_toast("Error generando el respaldo."),
            }
            true
        }
        Msg::ScheduleBackup => {
            let Some(settings) = &component.settings else {
                return false;
            };
            let request = ScheduleBackupRequest {
                frequency: settings.backup_frequency.clone(),
            };
            spawn_local(async move {
                let response = Request::post("/api/company/backup/schedule")
                    .json(&request)
                    .expect("serializable request")
                    .send()
                    .await;
                match response {
                    Ok(resp) if resp.ok() => show_toast("Respaldo programado."),
                    _ => show_toast("Error programando el respaldo."),
                }
            });
            if let Some(settings) = component.settings.as_mut() {
                settings.backup_enabled = true;
            }
            true
        }
    }
}
