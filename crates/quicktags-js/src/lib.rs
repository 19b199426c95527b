//! WASM bindings for the quicktags toolbar.
//!
//! Provides an embeddable toolbar for JavaScript/TypeScript pages:
//!
//! ```js
//! import init, { JsToolbar } from "quicktags-js";
//! await init();
//! const toolbar = new JsToolbar("content");
//! toolbar.mount("toolbar-slot");
//! ```

mod logging;
mod toolbar;

pub use toolbar::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init();
}
