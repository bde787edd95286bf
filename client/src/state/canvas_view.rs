#[cfg(test)]
#[path = "canvas_view_test.rs"]
mod canvas_view_test;

use canvas::doc::ShapeKind;
use canvas::engine::Action;
use canvas::input::Mode;

/// Live canvas telemetry consumed by chrome (toolbar, status bar).
///
/// Only ever changed by folding in the engine's `Action`s, so it cannot
/// drift from the engine it mirrors.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewState {
    /// Set once the engine exists; the toolbar stays disabled until then.
    pub mounted: bool,
    pub mode: Mode,
    pub pending_kind: Option<ShapeKind>,
    pub shape_count: usize,
    pub zoom: f64,
    pub cursor: &'static str,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self {
            mounted: false,
            mode: Mode::default(),
            pending_kind: None,
            shape_count: 0,
            zoom: 1.0,
            cursor: "default",
        }
    }
}

impl CanvasViewState {
    /// Fold one engine action into the mirrored state.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::ShapeAdded(_) => self.shape_count += 1,
            Action::KindSelected(kind) => self.pending_kind = Some(*kind),
            Action::ModeChanged(mode) => self.mode = *mode,
            Action::CameraChanged(camera) => self.zoom = camera.zoom,
            Action::SetCursor(cursor) => self.cursor = *cursor,
            Action::ShapeMoved { .. } | Action::RenderNeeded => {}
        }
    }

    pub fn apply_all(&mut self, actions: &[Action]) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Whether the "add shape" control is enabled.
    pub fn can_add(&self) -> bool {
        self.mounted && self.pending_kind.is_some()
    }

    /// Value the shape picker should show; empty selects the placeholder.
    pub fn picker_value(&self) -> &'static str {
        self.pending_kind.map_or("", ShapeKind::as_str)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }
}
