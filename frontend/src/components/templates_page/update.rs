use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::template::{available_variables, EmailTemplate, TemplateType};

use crate::components::feedback::show_toast;

use super::messages::Msg;
use super::state::TemplatesPage;

fn empty_template() -> EmailTemplate {
    EmailTemplate {
        id: String::new(),
        name: String::new(),
        kind: TemplateType::OrderCreated.as_str().to_string(),
        subject: String::new(),
        html_content: String::new(),
        text_content: String::new(),
        variables: available_variables().iter().map(|v| v.to_string()).collect(),
        is_active: true,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub fn update(component: &mut TemplatesPage, ctx: &Context<TemplatesPage>, msg: Msg) -> bool {
    match msg {
        Msg::SetTemplates(templates) => {
            component.templates = templates;
            true
        }
        Msg::Edit(id) => {
            if let Some(template) = component.templates.iter().find(|t| t.id == id) {
                component.original_md5 = Some(TemplatesPage::digest(template));
                component.editing = Some(template.clone());
                component.active_tab = "editor".to_string();
            }
            true
        }
        Msg::NewTemplate => {
            let template = empty_template();
            component.original_md5 = Some(TemplatesPage::digest(&template));
            component.editing = Some(template);
            component.active_tab = "editor".to_string();
            true
        }
        Msg::CloseEditor => {
            component.editing = None;
            component.original_md5 = None;
            true
        }
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::SetField(field, value) => {
            if let Some(template) = component.editing.as_mut() {
                match field {
                    "name" => template.name = value,
                    "kind" => template.kind = value,
                    "subject" => template.subject = value,
                    "html_content" => template.html_content = value,
                    "text_content" => template.text_content = value,
                    _ => {}
                }
            }
            true
        }
        Msg::SetActive(active) => {
            if let Some(template) = component.editing.as_mut() {
                template.is_active = active;
            }
            true
        }
        Msg::InsertVariable(name) => {
            if let Some(template) = component.editing.as_mut() {
                template.html_content.push_str(&format!("#{{{}}}", name));
            }
            true
        }
        Msg::Save => {
            let Some(template) = component.editing.clone() else {
                return false;
            };
            if template.name.trim().is_empty() {
                show_toast("La plantilla necesita un nombre.");
                return false;
            }
            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::post("/api/templates/save")
                    .json(&template)
                    .expect("serializable template")
                    .send()
                    .await;
                let saved = match response {
                    Ok(resp) if resp.status() == 200 => {
                        resp.json::<EmailTemplate>().await.ok()
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
                Some(template) => {
                    component.original_md5 = Some(TemplatesPage::digest(&template));
                    component.editing = Some(template);
                    show_toast("Plantilla guardada.");
                    super::fetch_templates(ctx.link().clone());
                }
                None => show_toast("Error guardando la plantilla."),
            }
            true
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
                component.templates.retain(|t| t.id != id);
                if component
                    .editing
                    .as_ref()
                    .is_some_and(|t| t.id == id)
                {
                    component.editing = None;
                    component.original_md5 = None;
                }
                spawn_local(async move {
                    let response = Request::delete(&format!("/api/templates/{}", id))
                        .send()
                        .await;
                    match response {
                        Ok(resp) if resp.ok() => show_toast("Plantilla eliminada."),
                        _ => show_toast("Error eliminando la plantilla."),
                    }
                });
            }
            true
        }
    }
}
