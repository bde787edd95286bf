//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::bridge::engine_slot;
use crate::components::{canvas_host::CanvasHost, status_bar::StatusBar, toolbar::Toolbar};
use crate::state::canvas_view::CanvasViewState;

/// Root application component.
///
/// Provides the engine slot and the mirrored view state to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(engine_slot());
    provide_context(RwSignal::new(CanvasViewState::default()));

    view! {
        <Title text="Shapeboard"/>
        <main class="board">
            <Toolbar/>
            <CanvasHost/>
            <StatusBar/>
        </main>
    }
}
