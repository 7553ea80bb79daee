use wasm_bindgen::prelude::*;

use crate::client::Client;

#[wasm_bindgen]
extern "C" {
    /// Any script object with `update(elapsed, height, width)` and `render()`.
    pub type JsClient;

    #[wasm_bindgen(method, catch, js_name = update)]
    fn js_update(this: &JsClient, elapsed_ms: f64, height: u32, width: u32) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = render)]
    fn js_render(this: &JsClient) -> Result<(), JsValue>;
}

/// Drives a [`JsClient`]. Exceptions thrown by the script are logged and the
/// loop carries on.
pub struct ScriptClient {
    inner: JsClient,
}

impl ScriptClient {
    pub fn new(inner: JsClient) -> Self {
        Self { inner }
    }
}

impl Client for ScriptClient {
    fn update(&mut self, elapsed_ms: f64, height: u32, width: u32) {
        if let Err(err) = self.inner.js_update(elapsed_ms, height, width) {
            log::warn!("client update threw: {err:?}");
        }
    }

    fn render(&mut self) {
        if let Err(err) = self.inner.js_render() {
            log::warn!("client render threw: {err:?}");
        }
    }
}
