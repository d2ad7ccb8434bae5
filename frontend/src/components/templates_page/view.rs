use common::model::template::{
    available_variables, sample_variables, substitute_variables, template_type_config,
    EmailTemplate, TemplateType,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::confirm_dialog::confirm_dialog;

use super::messages::Msg;
use super::state::TemplatesPage;

pub fn view(component: &TemplatesPage, ctx: &Context<TemplatesPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="templates-page">
            <h1>{"Plantillas de Correo"}</h1>
            <button class="btn-primary" onclick={link.callback(|_| Msg::NewTemplate)}>
                {"Nueva plantilla"}
            </button>
            { build_list(component, link) }
            {
                match &component.editing {
                    Some(template) => build_editor(component, template, link),
                    None => html! {},
                }
            }
            {
                confirm_dialog(
                    component.pending_delete.is_some(),
                    "¿Eliminar esta plantilla?",
                    link.callback(|_| Msg::ConfirmDelete),
                    link.callback(|_| Msg::CancelDelete),
                )
            }
        </div>
    }
}

fn build_list(component: &TemplatesPage, link: &Scope<TemplatesPage>) -> Html {
    if component.templates.is_empty() {
        return html! { <p>{"No hay plantillas todavía."}</p> };
    }
    html! {
        <ul class="template-list">
            { for component.templates.iter().map(|template| {
                let edit_id = template.id.clone();
                let delete_id = template.id.clone();
                let (kind_label, kind_class) = template_type_config(&template.kind);
                html! {
                    <li class="template-item">
                        <span class={classes!("badge", kind_class)}>{ kind_label }</span>
                        <span class="template-name">{ &template.name }</span>
                        <span class="variable-chips">
                            { for template.variables.iter().map(|name| html! {
                                <span class="chip">{ format!("#{{{}}}", name) }</span>
                            }) }
                        </span>
                        {
                            if template.is_active {
                                html! {}
                            } else {
                                html! { <span class="badge badge-inactive">{"Inactiva"}</span> }
                            }
                        }
                        <button
                            class="btn-secondary"
                            onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}
                        >
                            {"Editar"}
                        </button>
                        <button
                            class="btn-danger"
                            onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                        >
                            {"Eliminar"}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

fn build_editor(
    component: &TemplatesPage,
    template: &EmailTemplate,
    link: &Scope<TemplatesPage>,
) -> Html {
    html! {
        <div class="template-editor">
            { build_tab_bar(component, link) }
            {
                if component.active_tab == "editor" {
                    build_editor_tab(component, template, link)
                } else {
                    build_preview_tab(template)
                }
            }
        </div>
    }
}

/// Shows a red dot on the editor tab while there are unsaved changes.
fn build_tab_bar(component: &TemplatesPage, link: &Scope<TemplatesPage>) -> Html {
    html! {
        <div class="tab-bar">
            <button
                class={classes!("tab-btn", if component.active_tab == "editor" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("editor".to_string()))}
            >
                {"Editor"}
                {
                    if component.is_dirty() {
                        html! { <span class="dirty-dot">{"●"}</span> }
                    } else {
                        html! {}
                    }
                }
            </button>
            <button
                class={classes!("tab-btn", if component.active_tab == "preview" { "active" } else { "" })}
                onclick={link.callback(|_| Msg::SetTab("preview".to_string()))}
            >
                {"Previsualización"}
            </button>
        </div>
    }
}

fn text_field(
    link: &Scope<TemplatesPage>,
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

fn build_editor_tab(
    component: &TemplatesPage,
    template: &EmailTemplate,
    link: &Scope<TemplatesPage>,
) -> Html {
    html! {
        <div class="editor-tab">
            { text_field(link, "name", "Nombre", template.name.clone()) }

            <label>{"Tipo"}</label>
            <select
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetField("kind", select.value())
                })}
            >
                {
                    for TemplateType::ALL.iter().map(|kind| html! {
                        <option
                            value={kind.as_str()}
                            selected={template.kind == kind.as_str()}
                        >
                            { kind.label() }
                        </option>
                    })
                }
            </select>

            { text_field(link, "subject", "Asunto", template.subject.clone()) }

            <label>{"Contenido HTML"}</label>
            <textarea
                rows={12}
                value={template.html_content.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetField("html_content", input.value())
                })}
            />

            <label>{"Contenido de texto plano"}</label>
            <textarea
                rows={6}
                value={template.text_content.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetField("text_content", input.value())
                })}
            />

            <label>
                <input
                    type="checkbox"
                    checked={template.is_active}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetActive(input.checked())
                    })}
                />
                {"Plantilla activa"}
            </label>

            <div class="variable-palette">
                <span>{"Variables disponibles:"}</span>
                {
                    for available_variables().into_iter().map(|name| html! {
                        <button
                            class="btn-link"
                            onclick={link.callback(move |_| Msg::InsertVariable(name))}
                        >
                            { format!("#{{{}}}", name) }
                        </button>
                    })
                }
            </div>

            <div class="editor-actions">
                <button
                    class="btn-primary"
                    disabled={component.saving}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    { if component.saving { "Guardando..." } else { "Guardar" } }
                </button>
                <button class="btn-secondary" onclick={link.callback(|_| Msg::CloseEditor)}>
                    {"Cerrar"}
                </button>
            </div>
        </div>
    }
}

/// Renders the template with the demo variable values, the same
/// substitution the server applies when sending.
fn build_preview_tab(template: &EmailTemplate) -> Html {
    let variables = sample_variables();
    let subject = substitute_variables(&template.subject, &variables);
    let body = substitute_variables(&template.html_content, &variables);
    let text = substitute_variables(&template.text_content, &variables);
    html! {
        <div class="preview-tab">
            <p class="preview-subject"><strong>{"Asunto: "}</strong>{ subject }</p>
            <div class="preview-body" dangerously_set_inner_html={body} />
            {
                if text.trim().is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Versión de texto plano"}</h3>
                            <pre class="preview-text">{ text }</pre>
                        </>
                    }
                }
            }
        </div>
    }
}
