use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("navigator.clipboard is unavailable")]
    ClipboardUnavailable,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
