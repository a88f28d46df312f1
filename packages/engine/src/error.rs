use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the backdrop. Everything cosmetic (late frames, dropped
/// pointer events) is absorbed and never reaches this type.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("invalid backdrop config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse backdrop config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("backdrop has already been destroyed")]
    Destroyed,

    #[error("host environment error: {0}")]
    Host(String),
}

impl From<BackdropError> for JsValue {
    fn from(e: BackdropError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl BackdropError {
    /// Wrap a failed browser call
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(crate) fn host(context: &str, err: JsValue) -> Self {
        BackdropError::Host(format!("{context}: {err:?}"))
    }
}
