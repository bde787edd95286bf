//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the shape store and camera and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) converts the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::consts::BACKGROUND;
use crate::doc::{Shape, ShapeKind, ShapeStore};
use crate::hit::triangle_vertices;

/// Draw the full scene: background, then shapes in insertion order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    store: &ShapeStore,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: background in screen space.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Layer 2: shapes in world space, bottom first.
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;
    for shape in store.iter() {
        draw_shape(ctx, shape)?;
    }

    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    let kind = shape.kind();
    ctx.set_fill_style_str(kind.fill());
    match kind {
        ShapeKind::Rectangle => {
            ctx.fill_rect(shape.x, shape.y, kind.size(), kind.size());
            Ok(())
        }
        ShapeKind::Circle => draw_circle(ctx, shape),
        ShapeKind::Triangle => {
            draw_triangle(ctx, shape);
            Ok(())
        }
    }
}

fn draw_circle(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(shape.x, shape.y, shape.kind().size(), 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_triangle(ctx: &CanvasRenderingContext2d, shape: &Shape) {
    let [a, b, c] = triangle_vertices(shape.position(), shape.kind().size());
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.line_to(c.x, c.y);
    ctx.close_path();
    ctx.fill();
}
