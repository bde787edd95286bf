//! Bottom status bar showing mode, zoom level, and shape count.

use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;

#[component]
pub fn StatusBar() -> impl IntoView {
    let view_state = expect_context::<RwSignal<CanvasViewState>>();

    let mode = move || view_state.get().mode.label();
    let zoom = move || format!("{}%", view_state.get().zoom_percent());
    let shapes = move || match view_state.get().shape_count {
        1 => "1 shape".to_owned(),
        n => format!("{n} shapes"),
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__mode">{mode}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__objects">{shapes}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__zoom">{zoom}</span>
        </div>
    }
}
