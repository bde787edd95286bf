//! Glue between Leptos event handlers and the imperative `canvas::Engine`.
//!
//! The engine lives in a thread-local `StoredValue` slot that stays `None`
//! until the `<canvas>` element is mounted. Every handler goes through
//! [`dispatch`], which is a no-op while the slot is empty.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use canvas::engine::{Action, Engine};
use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;

/// Slot holding the engine once the canvas is mounted.
pub type EngineSlot = StoredValue<Option<Engine>, LocalStorage>;

/// Create an empty slot.
pub fn engine_slot() -> EngineSlot {
    StoredValue::new_local(None)
}

/// Run `f` against the mounted engine, redraw if it asks for it, and fold the
/// resulting actions into the view state.
pub fn dispatch<F>(slot: EngineSlot, view_state: RwSignal<CanvasViewState>, f: F)
where
    F: FnOnce(&mut Engine) -> Vec<Action>,
{
    let mut actions = Vec::new();
    slot.update_value(|engine| {
        let Some(engine) = engine.as_mut() else {
            return;
        };
        actions = f(engine);
        if actions.contains(&Action::RenderNeeded) {
            render(engine);
        }
    });

    if !actions.is_empty() {
        view_state.update(|v| v.apply_all(&actions));
    }
}

/// Draw the scene, logging instead of failing.
pub fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::warn!("render failed: {err}");
    }
}
