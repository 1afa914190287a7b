use crate::error::{PageError, Result};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Writes `text` to the system clipboard.
///
/// `navigator.clipboard` is undefined outside secure contexts, so it is looked
/// up dynamically and reported as [`PageError::ClipboardUnavailable`].
pub async fn write_text(text: &str) -> Result<()> {
    let window = crate::dom::window()?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(PageError::ClipboardUnavailable);
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()
        .map_err(|_| PageError::ClipboardUnavailable)?;
    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()
        .map_err(PageError::from)?;
    JsFuture::from(promise).await?;
    Ok(())
}
