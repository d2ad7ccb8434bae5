//! Shared user-feedback helpers: toast notifications, date formatting and
//! the MD5 digest used for dirty-checking unsaved edits.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates and injects a styled `div` into the DOM for non-blocking feedback
/// (e.g. "Orden actualizada", "Error al guardar"). The toast removes itself
/// after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(message);
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Formats an RFC 3339 timestamp with the browser locale; returns the raw
/// value when the browser cannot parse it.
pub fn format_date(timestamp: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
    if date.get_time().is_nan() {
        timestamp.to_string()
    } else {
        date.to_locale_string("es-ES", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
}

/// Hex MD5 digest used to compare the loaded content against the edited one.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}
