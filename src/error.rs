use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("failed to attach `{event}` listener: {detail}")]
    Listen { event: &'static str, detail: String },

    #[error("failed to create intersection observer: {0}")]
    Observer(String),

    #[error("failed to create <{tag}> element: {detail}")]
    CreateElement { tag: &'static str, detail: String },

    #[error("failed to read form data: {0}")]
    FormData(String),

    #[error("failed to serialize form record: {0}")]
    Serialize(String),
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
