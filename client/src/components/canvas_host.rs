//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! Mounts a full-window `<canvas>`, builds the `Engine` once the element
//! exists, and forwards wheel and pointer events to it. A cancelled pointer
//! or lost capture ends the gesture in flight. Window resizes update
//! the engine viewport and trigger a redraw.

use canvas::camera::Point;
use canvas::engine::Engine;
use canvas::input::{Button, WheelDelta};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::bridge::{EngineSlot, dispatch, render};
use crate::state::canvas_view::CanvasViewState;

/// Viewport size in CSS pixels and the device pixel ratio.
fn window_metrics() -> (f64, f64, f64) {
    let win = window();
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height, win.device_pixel_ratio())
}

fn screen_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Full-window drawing surface.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let view_state = expect_context::<RwSignal<CanvasViewState>>();
    let slot = expect_context::<EngineSlot>();
    let canvas_ref = NodeRef::<html::Canvas>::new();

    // Build the engine as soon as the element is in the DOM.
    Effect::new(move || {
        let Some(element) = canvas_ref.get() else {
            return;
        };
        if slot.with_value(Option::is_some) {
            return;
        }
        match Engine::new(element) {
            Ok(mut engine) => {
                let (width, height, dpr) = window_metrics();
                engine.set_viewport(width, height, dpr);
                render(&engine);
                slot.set_value(Some(engine));
                view_state.update(|v| v.mounted = true);
                log::info!("canvas mounted at {width}x{height} (dpr {dpr})");
            }
            Err(err) => log::error!("canvas unavailable: {err}"),
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        let (width, height, dpr) = window_metrics();
        slot.update_value(|engine| {
            if let Some(engine) = engine.as_mut() {
                engine.set_viewport(width, height, dpr);
                render(engine);
            }
        });
    });
    on_cleanup(move || resize.remove());

    let on_wheel = move |ev: ev::WheelEvent| {
        ev.prevent_default();
        let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
        let pt = screen_point(&ev);
        dispatch(slot, view_state, |engine| engine.on_wheel(pt, delta));
    };

    let on_pointer_down = move |ev: ev::PointerEvent| {
        let Some(button) = Button::from_dom(ev.button()) else {
            return;
        };
        if let Some(element) = canvas_ref.get() {
            if let Err(err) = element.set_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer capture refused: {err:?}");
            }
        }
        let pt = screen_point(&ev);
        dispatch(slot, view_state, |engine| engine.on_pointer_down(pt, button));
    };

    let on_pointer_move = move |ev: ev::PointerEvent| {
        // Primary released without a pointerup reaching us.
        if ev.buttons() & 1 == 0 {
            dispatch(slot, view_state, Engine::cancel_gesture);
        }
        let pt = screen_point(&ev);
        dispatch(slot, view_state, |engine| engine.on_pointer_move(pt));
    };

    let on_pointer_up = move |ev: ev::PointerEvent| {
        let Some(button) = Button::from_dom(ev.button()) else {
            return;
        };
        let pt = screen_point(&ev);
        dispatch(slot, view_state, |engine| engine.on_pointer_up(pt, button));
    };

    let on_pointer_cancel = move |_: ev::PointerEvent| dispatch(slot, view_state, Engine::cancel_gesture);

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            style:cursor=move || view_state.get().cursor
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:lostpointercapture=on_pointer_cancel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
