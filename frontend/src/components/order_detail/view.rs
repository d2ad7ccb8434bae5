use common::model::order::OrderStatus;
use web_sys::{DragEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::badges::{priority_badge, status_badge};
use crate::components::confirm_dialog::confirm_dialog;
use crate::components::document_card::document_list;
use crate::components::feedback::format_date;

use super::helpers::verification_url;
use super::messages::Msg;
use super::state::OrderDetail;

pub fn view(component: &OrderDetail, ctx: &Context<OrderDetail>) -> Html {
    let link = ctx.link();

    if component.load_error {
        return html! {
            <div class="order-detail">
                <p class="error">{"No se pudo cargar la orden."}</p>
                <button class="btn-primary" onclick={link.callback(|_| Msg::Retry)}>
                    {"Reintentar"}
                </button>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::Back)}>
                    {"Volver"}
                </button>
            </div>
        };
    }
    let Some(order) = &component.order else {
        return html! { <p>{"Cargando orden..."}</p> };
    };

    html! {
        <div class="order-detail">
            <button class="btn-secondary" onclick={link.callback(|_| Msg::Back)}>
                {"← Volver a órdenes"}
            </button>
            <h1>{ format!("Orden #{}", order.short_id()) }</h1>
            <div class="order-badges">
                { status_badge(&component.status) }
                { priority_badge(order.tiempo_procesamiento) }
            </div>

            { build_client_block(order) }
            { build_edit_block(component, link) }
            { build_originals_block(order) }
            { build_documents_block(component, link) }
            { build_verification_block(order, link) }

            {
                confirm_dialog(
                    component.pending_remove.is_some(),
                    "¿Quitar este documento de la orden?",
                    link.callback(|_| Msg::ConfirmRemoveDocument),
                    link.callback(|_| Msg::CancelRemoveDocument),
                )
            }
        </div>
    }
}

fn build_client_block(order: &common::model::order::TranslationOrder) -> Html {
    html! {
        <section class="card">
            <h2>{"Cliente"}</h2>
            <p>{ &order.nombre }</p>
            <p>{ &order.correo }</p>
            {
                if order.telefono.is_empty() {
                    html! {}
                } else {
                    html! { <p>{ &order.telefono }</p> }
                }
            }
            <p>{ format!("{} → {}", order.idioma_origen, order.idioma_destino) }</p>
            <p>{ format!("Solicitada: {}", format_date(&order.fecha_solicitud)) }</p>
        </section>
    }
}

fn build_edit_block(component: &OrderDetail, link: &Scope<OrderDetail>) -> Html {
    html! {
        <section class="card">
            <h2>{"Gestión"}</h2>
            <label>{"Estado"}</label>
            <select
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetStatus(select.value())
                })}
            >
                {
                    for OrderStatus::ALL.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={component.status == status.as_str()}
                        >
                            { status.label() }
                        </option>
                    })
                }
            </select>

            <label>{ format!("Progreso: {}%", component.progress) }</label>
            <input
                type="range"
                min="0"
                max="100"
                value={component.progress.to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetProgress(input.value().parse().unwrap_or(0))
                })}
            />

            <label>{"Notas internas"}</label>
            <textarea
                rows={5}
                value={component.internal_notes.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetNotes(input.value())
                })}
            />

            <button
                class="btn-primary"
                disabled={component.saving}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if component.saving { "Guardando..." } else { "Guardar cambios" } }
            </button>
        </section>
    }
}

/// The files the client attached when requesting the order. They are never
/// edited from here, only downloaded.
fn build_originals_block(order: &common::model::order::TranslationOrder) -> Html {
    let originals = order.archivos_urls.normalize();
    html! {
        <section class="card">
            <h2>{"Documentos originales"}</h2>
            {
                if originals.is_empty() {
                    html! { <p>{"El cliente no adjuntó documentos."}</p> }
                } else {
                    document_list(&originals, None)
                }
            }
        </section>
    }
}

fn build_documents_block(component: &OrderDetail, link: &Scope<OrderDetail>) -> Html {
    let on_drop = link.batch_callback(|e: DragEvent| {
        e.prevent_default();
        e.data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });

    html! {
        <section class="card">
            <h2>{"Documentos traducidos"}</h2>
            { document_list(
                &component.documents,
                Some(link.callback(Msg::RequestRemoveDocument)),
            ) }
            <div
                class="upload-zone"
                ondragover={Callback::from(|e: DragEvent| e.prevent_default())}
                ondrop={on_drop}
            >
                <p>{"Arrastre un archivo aquí o selecciónelo (PDF, DOC, DOCX, TXT, máx. 50MB)."}</p>
                <input
                    type="file"
                    accept=".pdf,.doc,.docx,.txt"
                    disabled={component.uploading}
                    onchange={link.batch_callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                    })}
                />
                {
                    if component.uploading {
                        html! { <p>{"Subiendo documento..."}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

fn build_verification_block(
    order: &common::model::order::TranslationOrder,
    link: &Scope<OrderDetail>,
) -> Html {
    html! {
        <section class="card">
            <h2>{"Enlace de verificación"}</h2>
            <code>{ verification_url(&order.verification_token) }</code>
            <button class="btn-secondary" onclick={link.callback(|_| Msg::CopyVerificationLink)}>
                {"Copiar enlace"}
            </button>
        </section>
    }
}
