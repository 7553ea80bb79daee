use thiserror::Error;

/// Message shown to the user when no rendering context can be created.
pub const CONTEXT_UNAVAILABLE_NOTICE: &str = "Failed to initialize WebGL.";

/// Reasons the frame loop could not be started.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element #{0} not found")]
    ElementNotFound(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("WebGL2 not supported")]
    ContextUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

/// Bad values in the canvas `data-*` configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid frame rate {0:?}")]
    InvalidFps(String),
    #[error("unknown elapsed-time policy {0:?} (expected \"tick\" or \"start\")")]
    UnknownElapsed(String),
    #[error("unknown start policy {0:?} (expected \"immediate\" or \"deferred\")")]
    UnknownStart(String),
    #[error("invalid value {value:?} for {name}")]
    InvalidFlag { name: &'static str, value: String },
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::StartError;
    use wasm_bindgen::JsValue;

    impl From<JsValue> for StartError {
        fn from(value: JsValue) -> Self {
            StartError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
        }
    }

    impl From<StartError> for JsValue {
        fn from(err: StartError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }
}
