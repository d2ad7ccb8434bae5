use common::model::order::{OrderStatus, TranslationOrder};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::badges::{priority_badge, status_badge};
use crate::components::confirm_dialog::confirm_dialog;
use crate::components::feedback::format_date;

use super::messages::Msg;
use super::state::Dashboard;

pub fn view(component: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard">
            <h1>{"Órdenes de Traducción"}</h1>
            { build_counters(component) }
            { build_toolbar(component, link) }
            {
                if component.show_create_form {
                    build_create_form(component, link)
                } else {
                    html! {}
                }
            }
            { build_table(component, link) }
            {
                confirm_dialog(
                    component.pending_delete.is_some(),
                    "¿Eliminar esta orden? Esta acción no se puede deshacer.",
                    link.callback(|_| Msg::ConfirmDelete),
                    link.callback(|_| Msg::CancelDelete),
                )
            }
        </div>
    }
}

fn build_counters(component: &Dashboard) -> Html {
    html! {
        <div class="stat-row">
            <div class="stat-card">
                <span class="stat-value">{ component.orders.len() }</span>
                <span class="stat-label">{"Total"}</span>
            </div>
            {
                for OrderStatus::ALL.iter().map(|status| html! {
                    <div class="stat-card">
                        <span class="stat-value">
                            { component.count_with_status(status.as_str()) }
                        </span>
                        <span class="stat-label">{ status.label() }</span>
                    </div>
                })
            }
        </div>
    }
}

fn build_toolbar(component: &Dashboard, link: &Scope<Dashboard>) -> Html {
    html! {
        <div class="dashboard-toolbar">
            <input
                type="text"
                placeholder="Buscar por nombre, correo, idioma o ID..."
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetSearch(input.value())
                })}
            />
            <select
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetStatusFilter(select.value())
                })}
            >
                <option value="todos" selected={component.status_filter == "todos"}>
                    {"Todos los estados"}
                </option>
                {
                    for OrderStatus::ALL.iter().map(|status| html! {
                        <option
                            value={status.as_str()}
                            selected={component.status_filter == status.as_str()}
                        >
                            { status.label() }
                        </option>
                    })
                }
            </select>
            <button class="btn-primary" onclick={link.callback(|_| Msg::ToggleCreateForm)}>
                {
                    if component.show_create_form { "Cerrar formulario" } else { "Nueva orden" }
                }
            </button>
        </div>
    }
}

fn draft_input(
    link: &Scope<Dashboard>,
    field: &'static str,
    placeholder: &str,
    value: String,
) -> Html {
    html! {
        <input
            type="text"
            placeholder={placeholder.to_string()}
            value={value}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::SetDraftField(field, input.value())
            })}
        />
    }
}

fn build_create_form(component: &Dashboard, link: &Scope<Dashboard>) -> Html {
    let draft = &component.draft;
    html! {
        <div class="create-form">
            { draft_input(link, "nombre", "Nombre del cliente", draft.nombre.clone()) }
            { draft_input(link, "correo", "Correo", draft.correo.clone()) }
            { draft_input(link, "telefono", "Teléfono (opcional)", draft.telefono.clone()) }
            { draft_input(link, "idioma_origen", "Idioma de origen", draft.idioma_origen.clone()) }
            { draft_input(link, "idioma_destino", "Idioma de destino", draft.idioma_destino.clone()) }
            { draft_input(link, "tiempo_procesamiento", "Días de procesamiento", draft.tiempo_procesamiento.clone()) }
            <button class="btn-primary" onclick={link.callback(|_| Msg::SubmitCreate)}>
                {"Crear orden"}
            </button>
        </div>
    }
}

fn build_table(component: &Dashboard, link: &Scope<Dashboard>) -> Html {
    if component.loading {
        return html! { <p>{"Cargando órdenes..."}</p> };
    }
    if component.load_error {
        return html! {
            <div>
                <p class="error">{"No se pudieron cargar las órdenes."}</p>
                <button class="btn-primary" onclick={link.callback(|_| Msg::Retry)}>
                    {"Reintentar"}
                </button>
            </div>
        };
    }
    let orders = component.filtered_orders();
    if orders.is_empty() {
        return html! { <p>{"No hay órdenes que coincidan."}</p> };
    }

    html! {
        <table class="orders-table">
            <thead>
                <tr>
                    <th>{"Orden"}</th>
                    <th>{"Cliente"}</th>
                    <th>{"Idiomas"}</th>
                    <th>{"Estado"}</th>
                    <th>{"Prioridad"}</th>
                    <th>{"Solicitada"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for orders.iter().map(|order| build_row(order, link)) }
            </tbody>
        </table>
    }
}

fn build_row(order: &TranslationOrder, link: &Scope<Dashboard>) -> Html {
    let open_id = order.id.clone();
    let delete_id = order.id.clone();
    html! {
        <tr class="order-row">
            <td onclick={link.callback(move |_| Msg::OpenOrder(open_id.clone()))}>
                { format!("#{}", order.short_id()) }
            </td>
            <td>
                <div>{ &order.nombre }</div>
                <small>{ &order.correo }</small>
            </td>
            <td>{ format!("{} → {}", order.idioma_origen, order.idioma_destino) }</td>
            <td>{ status_badge(&order.status) }</td>
            <td>{ priority_badge(order.tiempo_procesamiento) }</td>
            <td>{ format_date(&order.fecha_solicitud) }</td>
            <td>
                <button
                    class="btn-danger"
                    onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                >
                    {"Eliminar"}
                </button>
            </td>
        </tr>
    }
}
