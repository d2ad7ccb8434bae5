//! Client-side upload validation and the verification-link helpers. The
//! server applies the same limits; these checks only save a round trip.

use wasm_bindgen_futures::JsFuture;

/// Upload cap, mirrored by the server.
pub const MAX_FILE_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "doc", "docx", "txt"];

/// Validates a candidate upload before any bytes leave the browser.
pub fn validate_file(name: &str, size: f64) -> Result<(), String> {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Tipo de archivo no permitido. Use PDF, DOC, DOCX o TXT.".to_string());
    }
    if size > MAX_FILE_BYTES {
        return Err("El archivo no debe superar 50MB.".to_string());
    }
    Ok(())
}

/// Absolute URL the client opens from the email, built from the current
/// origin.
pub fn verification_url(token: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/verificar/{}", origin, token)
}

/// Copies `text` to the clipboard; resolves the browser promise in the
/// background.
pub fn copy_to_clipboard(text: String) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(clipboard.write_text(&text)).await;
        });
    }
}
