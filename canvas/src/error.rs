//! Error type for the browser-facing half of the engine.

use wasm_bindgen::JsValue;

/// Failures that can occur while talking to the `<canvas>` element.
///
/// Engine-core operations never fail; only acquiring a context and drawing
/// go through here.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The element did not hand out a `2d` rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// A Canvas2D call threw.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
