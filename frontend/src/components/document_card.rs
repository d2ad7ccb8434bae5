//! Card for one translated document: icon by extension, recovered file
//! name, download link and an optional delete action.

use common::model::documents::{extract_file_name, file_icon};
use yew::prelude::*;

/// Renders one document card. `on_delete` is `None` on the public
/// verification page, where documents can only be downloaded.
pub fn document_card(url: &str, on_delete: Option<Callback<MouseEvent>>) -> Html {
    let icon = file_icon(url);
    let name = extract_file_name(url);
    html! {
        <div class="document-card">
            <span class="document-icon">{ icon.glyph() }</span>
            <span class="document-name" title={url.to_string()}>{ name }</span>
            <div class="document-actions">
                <a class="btn-link" href={url.to_string()} target="_blank" rel="noopener">
                    {"Descargar"}
                </a>
                {
                    match on_delete {
                        Some(callback) => html! {
                            <button class="btn-danger" onclick={callback}>{"Quitar"}</button>
                        },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

/// Renders a document list, or a placeholder when there are none.
pub fn document_list(urls: &[String], on_delete: Option<Callback<usize>>) -> Html {
    if urls.is_empty() {
        return html! {
            <p class="documents-empty">{"No hay documentos traducidos todavía."}</p>
        };
    }
    html! {
        <div class="document-list">
            {
                for urls.iter().enumerate().map(|(index, url)| {
                    let per_card = on_delete.as_ref().map(|callback| {
                        let callback = callback.clone();
                        Callback::from(move |_: MouseEvent| callback.emit(index))
                    });
                    document_card(url, per_card)
                })
            }
        </div>
    }
}
