use wasm_bindgen::JsValue;
use web_sys::Event;

/// `value` del elemento que disparó el evento (input, textarea, select)
pub fn event_value(event: &Event) -> String {
    event
        .target()
        .and_then(|target| js_sys::Reflect::get(&target, &JsValue::from_str("value")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

/// Diálogo de confirmación del navegador; sin window cuenta como "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
