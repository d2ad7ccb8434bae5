use common::model::order::{progress_message, OrderStatus, TranslationOrder};
use common::model::settings::CompanySettings;
use yew::prelude::*;

use crate::components::badges::status_badge;
use crate::components::document_card::document_list;
use crate::components::feedback::format_date;

use super::messages::Msg;
use super::state::VerificationPage;

pub fn view(component: &VerificationPage, ctx: &Context<VerificationPage>) -> Html {
    let link = ctx.link();

    if component.token_invalid {
        return wrap(html! {
            <p class="error">{"Código de verificación inválido. Revise el enlace de su correo."}</p>
        });
    }
    if component.load_error {
        return wrap(html! {
            <>
                <p class="error">{"No se pudo consultar el estado de su orden."}</p>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::Retry)}>
                    {"Reintentar"}
                </button>
            </>
        });
    }
    let Some(order) = &component.order else {
        return wrap(html! { <p>{"Consultando su orden..."}</p> });
    };

    wrap(html! {
        <>
            <h1>{ format!("Orden #{}", order.short_id()) }</h1>
            <p>{ format!("Hola {}, aquí está el estado de su traducción.", order.nombre) }</p>
            <div class="verification-status">
                { status_badge(&order.status) }
                <p>{ progress_message(&order.status, order.progress) }</p>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style={format!("width: {}%;", order.progress)}
                    />
                </div>
            </div>
            <p>{ format!("{} → {}", order.idioma_origen, order.idioma_destino) }</p>
            <p>{ format!("Solicitada: {}", format_date(&order.fecha_solicitud)) }</p>
            { build_originals(order) }
            { build_documents(order) }
            { build_contact(component.company.as_ref()) }
        </>
    })
}

fn wrap(inner: Html) -> Html {
    html! {
        <div class="verification-page">
            <div class="verification-card">{ inner }</div>
        </div>
    }
}

fn build_originals(order: &TranslationOrder) -> Html {
    let originals = order.archivos_urls.normalize();
    if originals.is_empty() {
        return html! {};
    }
    html! {
        <section>
            <h2>{"Documentos enviados"}</h2>
            { document_list(&originals, None) }
        </section>
    }
}

/// Translated documents appear once the translation is ready; earlier states
/// show only the progress message.
fn build_documents(order: &TranslationOrder) -> Html {
    let ready = matches!(
        OrderStatus::parse(&order.status),
        Some(OrderStatus::Completado) | Some(OrderStatus::Entregado)
    );
    if !ready {
        return html! {};
    }
    let documents = order.docs_translated.normalize();
    html! {
        <section>
            <h2>{"Documentos traducidos"}</h2>
            { document_list(&documents, None) }
        </section>
    }
}

fn build_contact(company: Option<&CompanySettings>) -> Html {
    let default = CompanySettings::default();
    let company = company.unwrap_or(&default);
    let name = if company.company_name.is_empty() {
        "Nuestro equipo de traducciones".to_string()
    } else {
        company.company_name.clone()
    };
    html! {
        <footer class="verification-contact">
            <h3>{ name }</h3>
            {
                company
                    .company_email
                    .as_ref()
                    .map(|email| html! { <p>{ email }</p> })
                    .unwrap_or_default()
            }
            {
                company
                    .company_phone
                    .as_ref()
                    .map(|phone| html! { <p>{ phone }</p> })
                    .unwrap_or_default()
            }
        </footer>
    }
}
