use common::model::settings::CompanySettings;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CompanyPage;

pub fn view(component: &CompanyPage, ctx: &Context<CompanyPage>) -> Html {
    let link = ctx.link();
    let Some(settings) = &component.settings else {
        return html! { <p>{"Cargando configuración..."}</p> };
    };

    html! {
        <div class="company-page">
            <h1>{"Configuración de la Empresa"}</h1>
            { build_identity_block(settings, link) }
            { build_smtp_block(component, settings, link) }
            { build_backup_block(component, settings, link) }
            <button
                class="btn-primary"
                disabled={component.saving}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if component.saving { "Guardando..." } else { "Guardar configuración" } }
            </button>
        </div>
    }
}

fn text_field(
    link: &Scope<CompanyPage>,
    field: &'static str,
    label: &str,
    value: String,
) -> Html {
    html! {
        <>
            <label>{ label }</label>
            <input
                type="text"
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetField(field, input.value())
                })}
            />
        </>
    }
}

fn build_identity_block(settings: &CompanySettings, link: &Scope<CompanyPage>) -> Html {
    html! {
        <section class="card">
            <h2>{"Identidad"}</h2>
            { text_field(link, "company_name", "Nombre", settings.company_name.clone()) }
            { text_field(link, "company_address", "Dirección", settings.company_address.clone().unwrap_or_default()) }
            { text_field(link, "company_phone", "Teléfono", settings.company_phone.clone().unwrap_or_default()) }
            { text_field(link, "company_email", "Correo de contacto", settings.company_email.clone().unwrap_or_default()) }
            { text_field(link, "company_website", "Sitio web", settings.company_website.clone().unwrap_or_default()) }
        </section>
    }
}

fn build_smtp_block(
    component: &CompanyPage,
    settings: &CompanySettings,
    link: &Scope<CompanyPage>,
) -> Html {
    html! {
        <section class="card">
            <h2>{"Correo saliente (SMTP)"}</h2>
            { text_field(link, "smtp_host", "Servidor", settings.smtp_host.clone().unwrap_or_default()) }
            { text_field(link, "smtp_port", "Puerto", settings.smtp_port.to_string()) }
            { text_field(link, "smtp_user", "Usuario", settings.smtp_user.clone().unwrap_or_default()) }
            <label>{"Contraseña"}</label>
            <input
                type="password"
                value={settings.smtp_password.clone().unwrap_or_default()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetField("smtp_password", input.value())
                })}
            />
            <label>
                <input
                    type="checkbox"
                    checked={settings.smtp_secure}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSmtpSecure(input.checked())
                    })}
                />
                {"Conexión segura (TLS)"}
            </label>
            <button
                class="btn-secondary"
                disabled={component.testing_smtp}
                onclick={link.callback(|_| Msg::TestSmtp)}
            >
                { if component.testing_smtp { "Probando..." } else { "Probar conexión" } }
            </button>
        </section>
    }
}

fn build_backup_block(
    component: &CompanyPage,
    settings: &CompanySettings,
    link: &Scope<CompanyPage>,
) -> Html {
    html! {
        <section class="card">
            <h2>{"Respaldos"}</h2>
            <label>{"Frecuencia"}</label>
            <select
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetBackupFrequency(select.value())
                })}
            >
                {
                    for [("daily", "Diario"), ("weekly", "Semanal"), ("monthly", "Mensual")]
                        .into_iter()
                        .map(|(value, label)| html! {
                            <option
                                value={value}
                                selected={settings.backup_frequency == value}
                            >
                                { label }
                            </option>
                        })
                }
            </select>
            <div class="backup-actions">
                <button class="btn-secondary" onclick={link.callback(|_| Msg::ScheduleBackup)}>
                    {"Programar respaldo"}
                </button>
                <button
                    class="btn-secondary"
                    disabled={component.backing_up}
                    onclick={link.callback(|_| Msg::RunBackup)}
                >
                    { if component.backing_up { "Generando..." } else { "Respaldar ahora" } }
                </button>
            </div>
            {
                match &component.last_backup {
                    Some(backup) => html! {
                        <p class="backup-result">
                            <a href={backup.url.clone()} target="_blank" rel="noopener">
                                {"Descargar último respaldo"}
                            </a>
                            <small>{ format!("MD5: {}", backup.md5) }</small>
                        </p>
                    },
                    None => html! {},
                }
            }
            {
                if settings.backup_enabled {
                    html! { <p><small>{"Respaldos automáticos activados."}</small></p> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
