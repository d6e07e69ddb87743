#![forbid(unsafe_code)]

//! `wasm-bindgen` export for the browser glue.
//!
//! ```text
//! const page = new NarropilPage();
//! const view = JSON.parse(page.handleInput(JSON.stringify({ type: "burger" })));
//! ```

use wasm_bindgen::prelude::*;

use narropil_overlay::OverlayConfig;

use crate::host::PageHost;

/// Overlay state for one page, driven from JavaScript.
#[wasm_bindgen]
pub struct NarropilPage {
    host: PageHost,
}

#[wasm_bindgen]
impl NarropilPage {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: PageHost::new(OverlayConfig::default()),
        }
    }

    /// Build a page from a JSON dismissal policy document.
    #[cfg(feature = "policy-config")]
    #[wasm_bindgen(js_name = fromPolicy)]
    pub fn from_policy(policy: &str) -> Result<NarropilPage, JsError> {
        let config = OverlayConfig::from_json_str(policy)?;
        Ok(Self {
            host: PageHost::new(config),
        })
    }

    /// Apply one JSON-encoded input and return the view as JSON.
    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&mut self, input: &str) -> Result<String, JsError> {
        Ok(self.host.handle_json(input)?)
    }

    /// Current view as JSON.
    pub fn view(&self) -> Result<String, JsError> {
        Ok(self.host.view_json()?)
    }
}

impl Default for NarropilPage {
    fn default() -> Self {
        Self::new()
    }
}
