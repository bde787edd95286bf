//! Top bar: shape picker, "add shape" button, and the mode toggle.

use canvas::doc::ShapeKind;
use canvas::engine::Engine;
use leptos::prelude::*;

use crate::bridge::{EngineSlot, dispatch};
use crate::state::canvas_view::CanvasViewState;

/// Toolbar overlaid on the canvas.
///
/// Every control is disabled until the canvas engine is mounted. The picker
/// starts on a disabled placeholder; "Add shape" stays disabled until a kind
/// has been picked. The mode button names the mode it switches to.
#[component]
pub fn Toolbar() -> impl IntoView {
    let view_state = expect_context::<RwSignal<CanvasViewState>>();
    let slot = expect_context::<EngineSlot>();

    let on_select = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<ShapeKind>() {
            Ok(kind) => dispatch(slot, view_state, |engine| engine.select_kind(kind)),
            Err(err) => log::warn!("{err}"),
        }
    };
    let on_add = move |_| dispatch(slot, view_state, Engine::add_pending);
    let on_toggle = move |_| dispatch(slot, view_state, Engine::toggle_mode);

    let options = ShapeKind::ALL
        .into_iter()
        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="toolbar">
            <div class="toolbar__group">
                <select
                    class="toolbar__select"
                    disabled=move || !view_state.get().mounted
                    prop:value=move || view_state.get().picker_value()
                    on:change=on_select
                >
                    <option value="" disabled=true>
                        "Select a shape"
                    </option>
                    {options}
                </select>
                <button class="btn" disabled=move || !view_state.get().can_add() on:click=on_add>
                    "Add shape"
                </button>
            </div>
            <button class="btn toolbar__mode" disabled=move || !view_state.get().mounted on:click=on_toggle>
                {move || view_state.get().mode.toggle_label()}
            </button>
        </div>
    }
}
