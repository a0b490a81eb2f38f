//! WASM bindings for the cssml compiler.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ html, vertices }` or throws on a parse error.

use wasm_bindgen::prelude::*;

/// Compile style-sheet source to HTML.
///
/// Returns a JS object with `{ html: string, vertices: object[] }`, where
/// `vertices` is the intermediate element tree.
/// Throws a JS error if the source fails to parse.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<JsValue, JsError> {
    let sheet = cssml_parser::Parser::parse(source).map_err(|e| JsError::new(&e.to_string()))?;

    let output = cssml_codegen::compile(&sheet);

    let vertices = serde_wasm_bindgen::to_value(&output.vertices)
        .map_err(|e| JsError::new(&e.to_string()))?;

    // Plain JS object { html, vertices }
    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"html".into(), &output.html.into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"vertices".into(), &vertices)
        .map_err(|_| JsError::new("Failed to set vertices property"))?;

    Ok(js_obj.into())
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
