use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::documents::DocumentField;
use common::model::order::TranslationOrder;
use common::requests::{UpdateOrderRequest, UploadResponse};

use crate::app::Route;
use crate::components::feedback::show_toast;

use super::helpers::{copy_to_clipboard, validate_file, verification_url};
use super::messages::Msg;
use super::state::OrderDetail;

pub fn update(component: &mut OrderDetail, ctx: &Context<OrderDetail>, msg: Msg) -> bool {
    match msg {
        Msg::SetOrder(order) => {
            component.adopt(order);
            true
        }
        Msg::LoadFailed => {
            component.load_error = true;
            show_toast("No se pudo cargar la orden.");
            true
        }
        Msg::Retry => {
            component.load_error = false;
            super::fetch_order(ctx.link().clone(), ctx.props().order_id.clone());
            true
        }
        Msg::SetStatus(status) => {
            component.status = status;
            true
        }
        Msg::SetProgress(progress) => {
            component.progress = progress.min(100);
            true
        }
        Msg::SetNotes(notes) => {
            component.internal_notes = notes;
            true
        }
        Msg::Save => {
            if component.saving || component.order.is_none() {
                return false;
            }
            component.saving = true;
            let request = UpdateOrderRequest {
                status: Some(component.status.clone()),
                progress: Some(component.progress),
                internal_notes: Some(component.internal_notes.clone()),
                docs_translated: Some(DocumentField::Many(
                    component
                        .documents
                        .iter()
                        .cloned()
                        .map(serde_json::Value::String)
                        .collect(),
                )),
            };
            let id = ctx.props().order_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::put(&format!("/api/orders/{}", id))
                    .json(&request)
                    .expect("serializable request")
                    .send()
                    .await;
                let saved = match response {
                    Ok(resp) if resp.status() == 200 => {
                        resp.json::<TranslationOrder>().await.ok()
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
                Some(order) => {
                    component.adopt(order);
                    show_toast("Orden actualizada.");
                }
                None => show_toast("Error guardando la orden."),
            }
            true
        }
        Msg::FileSelected(file) => {
            if component.uploading {
                return false;
            }
            if let Err(reason) = validate_file(&file.name(), file.size()) {
                show_toast(&reason);
                return false;
            }
            component.uploading = true;
            let id = ctx.props().order_id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let uploaded = upload_file(&id, file).await;
                link.send_message(Msg::UploadFinished(uploaded));
            });
            true
        }
        Msg::UploadFinished(uploaded) => {
            component.uploading = false;
            match uploaded {
                Some(documents) => {
                    component.documents = documents;
                    show_toast("Documento subido.");
                }
                None => show_toast("Error subiendo el documento."),
            }
            true
        }
        Msg::RequestRemoveDocument(index) => {
            component.pending_remove = Some(index);
            true
        }
        Msg::CancelRemoveDocument => {
            component.pending_remove = None;
            true
        }
        Msg::ConfirmRemoveDocument => {
            if let Some(index) = component.pending_remove.take() {
                if index < component.documents.len() {
                    component.documents.remove(index);
                    ctx.link().send_message(Msg::Save);
                }
            }
            true
        }
        Msg::CopyVerificationLink => {
            if let Some(order) = &component.order {
                copy_to_clipboard(verification_url(&order.verification_token));
                show_toast("Enlace de verificación copiado.");
            }
            false
        }
        Msg::Back => {
            ctx.props().on_navigate.emit(Route::Dashboard);
            false
        }
    }
}

async fn upload_file(order_id: &str, file: web_sys::File) -> Option<Vec<String>> {
    let form = FormData::new().ok()?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .ok()?;
    let response = Request::post(&format!("/api/orders/{}/documents", order_id))
        .body(JsValue::from(form))
        .ok()?
        .send()
        .await
        .ok()?;
    if response.status() != 200 {
        return None;
    }
    response
        .json::<UploadResponse>()
        .await
        .ok()
        .map(|r| r.docs_translated)
}
