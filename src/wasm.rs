//! WASM bindings for browser-based stylesheet generation.
//!
//! This module exposes the renderers to JavaScript via wasm-bindgen. Sheets
//! are passed as JSON in the format described in [`crate::sheet`].

use wasm_bindgen::prelude::*;

use crate::naming::HashedNamer;
use crate::render::{RenderOptions, format_css, render};
use crate::sheet;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Render a JSON sheet to CSS.
///
/// With `sorted` set, sibling blocks and root lines come out in sorted
/// order instead of declaration order.
#[wasm_bindgen]
pub fn render_json(json: &str, sorted: bool) -> Result<String, JsValue> {
    let tree = sheet::parse(json).map_err(js_err)?;
    let opts = RenderOptions::new();

    if sorted {
        let display = format_css(&tree, &opts).map_err(js_err)?;
        Ok(display.print(0))
    } else {
        Ok(render(&tree, &opts).map_err(js_err)?.css)
    }
}

/// Render a JSON sheet with hashed class names for its top-level selectors.
///
/// Returns a JSON object `{ "css": "...", "classMap": { ".a": ".a-1f2e3d4c" } }`.
#[wasm_bindgen]
pub fn scope_json(json: &str, prefix: &str) -> Result<String, JsValue> {
    let tree = sheet::parse(json).map_err(js_err)?;
    let mut opts = RenderOptions::new();
    opts.class_namer = Some(HashedNamer::new(prefix).into_namer());

    let out = render(&tree, &opts).map_err(js_err)?;
    let payload = serde_json::json!({
        "css": out.css,
        "classMap": out.class_map,
    });
    Ok(payload.to_string())
}
