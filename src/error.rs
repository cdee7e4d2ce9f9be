use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("no global `window` exists")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid mobile config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        EnhanceError::Dom(text)
    }
}

pub type Result<T, E = EnhanceError> = std::result::Result<T, E>;
