use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::CreateOrderRequest;

use crate::app::Route;
use crate::components::feedback::show_toast;

use super::messages::Msg;
use super::state::{Dashboard, OrderDraft};

pub fn update(component: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    match msg {
        Msg::SetOrders(orders) => {
            component.orders = orders;
            component.loading = false;
            component.load_error = false;
            true
        }
        Msg::LoadFailed => {
            component.loading = false;
            component.load_error = true;
            show_toast("Error cargando las órdenes.");
            true
        }
        Msg::Retry => {
            component.loading = true;
            component.load_error = false;
            super::fetch_orders(ctx.link().clone());
            true
        }
        Msg::SetSearch(text) => {
            component.search = text;
            true
        }
        Msg::SetStatusFilter(status) => {
            component.status_filter = status;
            true
        }
        Msg::OpenOrder(id) => {
            ctx.props().on_navigate.emit(Route::OrderDetail(id));
            false
        }
        Msg::RequestDelete(id) => {
            component.pending_delete = Some(id);
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            if let Some(id) = component.pending_delete.take() {
                component.orders.retain(|o| o.id != id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let response = Request::delete(&format!("/api/orders/{}", id))
                        .send()
                        .await;
                    match response {
                        Ok(resp) if resp.ok() => show_toast("Orden eliminada."),
                        _ => {
                            show_toast("Error eliminando la orden.");
                            super::fetch_orders(link);
                        }
                    }
                });
            }
            true
        }
        Msg::ToggleCreateForm => {
            component.show_create_form = !component.show_create_form;
            true
        }
        Msg::SetDraftField(field, value) => {
            let draft = &mut component.draft;
            match field {
                "nombre" => draft.nombre = value,
                "correo" => draft.correo = value,
                "telefono" => draft.telefono = value,
                "idioma_origen" => draft.idioma_origen = value,
                "idioma_destino" => draft.idioma_destino = value,
                "tiempo_procesamiento" => draft.tiempo_procesamiento = value,
                _ => {}
            }
            true
        }
        Msg::SubmitCreate => {
            let Some(request) = build_request(&component.draft) else {
                show_toast("Complete nombre, correo e idiomas.");
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::post("/api/orders")
                    .json(&request)
                    .expect("serializable request")
                    .send()
                    .await;
                let created = matches!(&response, Ok(resp) if resp.ok());
                link.send_message(Msg::CreateFinished(created));
            });
            false
        }
        Msg::CreateFinished(created) => {
            if created {
                show_toast("Orden creada.");
                component.show_create_form = false;
                component.draft = OrderDraft::default();
                super::fetch_orders(ctx.link().clone());
            } else {
                show_toast("Error creando la orden.");
            }
            true
        }
    }
}

fn build_request(draft: &OrderDraft) -> Option<CreateOrderRequest> {
    let nombre = draft.nombre.trim();
    let correo = draft.correo.trim();
    let origen = draft.idioma_origen.trim();
    let destino = draft.idioma_destino.trim();
    if nombre.is_empty() || correo.is_empty() || origen.is_empty() || destino.is_empty() {
        return None;
    }
    let dias = draft.tiempo_procesamiento.trim().parse::<i64>().unwrap_or(3);
    Some(CreateOrderRequest {
        nombre: nombre.to_string(),
        correo: correo.to_string(),
        telefono: draft.telefono.trim().to_string(),
        idioma_origen: origen.to_string(),
        idioma_destino: destino.to_string(),
        tiempo_procesamiento: dias.max(1),
        archivos_urls: Default::default(),
        document_type: None,
        word_count: None,
        estimated_delivery: None,
    })
}
