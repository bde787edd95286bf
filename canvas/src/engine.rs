use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, ZoomDirection, zoom_about};
use crate::doc::{Shape, ShapeId, ShapeKind, ShapeStore};
use crate::error::CanvasError;
use crate::hit;
use crate::input::{Button, InputState, Mode, UiState, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

const CURSOR_DEFAULT: &str = "default";
const CURSOR_GRAB: &str = "grab";
const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeAdded(Shape),
    ShapeMoved { id: ShapeId, x: f64, y: f64 },
    KindSelected(ShapeKind),
    ModeChanged(Mode),
    CameraChanged(Camera),
    SetCursor(&'static str),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub store: ShapeStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    rng: StdRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Core whose spawn positions are reproducible for a given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            store: ShapeStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            rng,
        }
    }

    // --- Toolbar ---

    /// Remember `kind` as the shape the next add will create.
    pub fn select_kind(&mut self, kind: ShapeKind) -> Vec<Action> {
        self.ui.pending_kind = Some(kind);
        vec![Action::KindSelected(kind)]
    }

    /// Add a shape of the pending kind. Does nothing until a kind has been selected.
    pub fn add_pending(&mut self) -> Vec<Action> {
        match self.ui.pending_kind {
            Some(kind) => self.add_shape(kind),
            None => Vec::new(),
        }
    }

    /// Add a shape of `kind` at a random spot in the spawn range.
    pub fn add_shape(&mut self, kind: ShapeKind) -> Vec<Action> {
        let shape = self.store.add(kind, &mut self.rng);
        log::debug!("added {} {} at ({:.1}, {:.1})", shape.kind(), shape.id(), shape.x, shape.y);
        vec![Action::ShapeAdded(shape), Action::RenderNeeded]
    }

    /// Switch between draw and cursor mode. Any gesture in flight is dropped.
    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.ui.mode = self.ui.mode.toggled();
        log::debug!("switched to {}", self.ui.mode.label());
        vec![Action::ModeChanged(self.ui.mode), Action::SetCursor(CURSOR_DEFAULT)]
    }

    /// Move a shape to an absolute world position. Unknown ids are ignored.
    pub fn move_shape(&mut self, id: ShapeId, x: f64, y: f64) -> Vec<Action> {
        if !self.store.update_position(id, x, y) {
            return Vec::new();
        }
        vec![Action::ShapeMoved { id, x, y }, Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Input events ---

    /// Start a pan (draw mode) or a shape drag (cursor mode, over a shape).
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        // One gesture at a time; a second pointer must not restart it.
        if button != Button::Primary || self.input.is_active() {
            return Vec::new();
        }

        match self.ui.mode {
            Mode::Draw => {
                self.input = InputState::Panning { start_screen: screen_pt, start_pan: self.camera.pan() };
                vec![Action::SetCursor(CURSOR_GRABBING)]
            }
            Mode::Cursor => {
                let world = self.camera.screen_to_world(screen_pt);
                let Some(shape) = hit::hit_test(world, &self.store).and_then(|id| self.store.get(id)).copied() else {
                    return Vec::new();
                };
                self.input = InputState::DraggingShape {
                    id: shape.id(),
                    grab_offset: Point::new(shape.x - world.x, shape.y - world.y),
                };
                vec![Action::SetCursor(CURSOR_GRABBING)]
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => vec![Action::SetCursor(self.hover_cursor(screen_pt))],
            InputState::Panning { start_screen, start_pan } => self.pan_drag(start_screen, start_pan, screen_pt),
            InputState::DraggingShape { id, grab_offset } => self.shape_drag(id, grab_offset, screen_pt),
        }
    }

    /// Finish the active gesture, applying the final pointer position.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        let mut actions = match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { start_screen, start_pan } => self.pan_drag(start_screen, start_pan, screen_pt),
            InputState::DraggingShape { id, grab_offset } => {
                let actions = self.shape_drag(id, grab_offset, screen_pt);
                if let Some(shape) = self.store.get(id) {
                    log::debug!("dropped {} at ({:.1}, {:.1})", shape.id(), shape.x, shape.y);
                }
                actions
            }
        };
        actions.push(Action::SetCursor(self.hover_cursor(screen_pt)));
        actions
    }

    /// Abandon the active gesture without applying a final position.
    ///
    /// For pointers the browser takes away mid-gesture (`pointercancel`,
    /// lost capture, or a move with the primary button no longer held).
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        if !self.input.is_active() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        log::debug!("gesture cancelled");
        vec![Action::SetCursor(CURSOR_DEFAULT)]
    }

    /// Zoom one step about the pointer.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.camera = zoom_about(screen_pt, ZoomDirection::from_wheel_delta(delta.dy), self.camera);

        // A pan in flight continues from the zoomed view.
        if let InputState::Panning { start_screen, start_pan } = &mut self.input {
            *start_screen = screen_pt;
            *start_pan = self.camera.pan();
        }

        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    fn pan_drag(&mut self, start_screen: Point, start_pan: Point, screen_pt: Point) -> Vec<Action> {
        self.camera.pan_to(Point::new(
            start_pan.x + (screen_pt.x - start_screen.x),
            start_pan.y + (screen_pt.y - start_screen.y),
        ));
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    fn shape_drag(&mut self, id: ShapeId, grab_offset: Point, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        self.move_shape(id, world.x + grab_offset.x, world.y + grab_offset.y)
    }

    fn hover_cursor(&self, screen_pt: Point) -> &'static str {
        if !self.ui.mode.shapes_draggable() {
            return CURSOR_DEFAULT;
        }
        let world = self.camera.screen_to_world(screen_pt);
        if hit::hit_test(world, &self.store).is_some() { CURSOR_GRAB } else { CURSOR_DEFAULT }
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.ui.mode
    }

    #[must_use]
    pub fn pending_kind(&self) -> Option<ShapeKind> {
        self.ui.pending_kind
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Number of shapes on the board.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.store.len()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ContextUnavailable`] if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, CanvasError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(CanvasError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Delegated toolbar ---

    pub fn select_kind(&mut self, kind: ShapeKind) -> Vec<Action> {
        self.core.select_kind(kind)
    }

    pub fn add_pending(&mut self) -> Vec<Action> {
        self.core.add_pending()
    }

    pub fn toggle_mode(&mut self) -> Vec<Action> {
        self.core.toggle_mode()
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        self.core.cancel_gesture()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Js`] if a Canvas2D call fails.
    pub fn render(&self) -> Result<(), CanvasError> {
        let core = &self.core;
        render::draw(&self.ctx, &core.store, &core.camera, core.viewport_width, core.viewport_height, core.dpr)?;
        Ok(())
    }
}
