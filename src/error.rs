use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that stop the page script from binding at all.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
