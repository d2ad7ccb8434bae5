//! Blocking confirmation dialog used before destructive actions.

use yew::prelude::*;

/// Renders the overlay when `visible`; destructive actions go through this
/// instead of the browser's `confirm`.
pub fn confirm_dialog(
    visible: bool,
    message: &str,
    on_confirm: Callback<MouseEvent>,
    on_cancel: Callback<MouseEvent>,
) -> Html {
    if !visible {
        return html! {};
    }
    html! {
        <div class="dialog-overlay">
            <div class="dialog-box">
                <p>{ message }</p>
                <div class="dialog-actions">
                    <button class="btn-danger" onclick={on_confirm}>{"Eliminar"}</button>
                    <button class="btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
                </div>
            </div>
        </div>
    }
}
