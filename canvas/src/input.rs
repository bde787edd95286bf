//! Input model: interaction mode, pending shape choice, pointer buttons, and
//! the gesture state machine.
//!
//! `Mode` decides who owns a drag: the background (pan) or the shapes.
//! `UiState` is the persistent choice made through the toolbar. `InputState`
//! is the active gesture tracked between pointer-down and pointer-up, carrying
//! the context needed to turn later pointer positions into absolute values.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{ShapeId, ShapeKind};

/// Interaction mode.
///
/// Exactly one of "background pannable" and "shapes draggable" holds in
/// every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Dragging the background pans the view; shapes stay put.
    #[default]
    Draw,
    /// Dragging a shape moves it; the background stays put.
    Cursor,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Draw => Self::Cursor,
            Self::Cursor => Self::Draw,
        }
    }

    #[must_use]
    pub fn background_draggable(self) -> bool {
        self == Self::Draw
    }

    #[must_use]
    pub fn shapes_draggable(self) -> bool {
        !self.background_draggable()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draw => "Draw mode",
            Self::Cursor => "Cursor mode",
        }
    }

    /// Label for a control that switches away from this mode.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        self.toggled().label()
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes yield `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = wheel rolled away from the user).
    pub dy: f64,
}

/// Persistent UI state set through the toolbar.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// Current interaction mode.
    pub mode: Mode,
    /// Shape kind the next "add" will create. Stays set after adding.
    pub pending_kind: Option<ShapeKind>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view by dragging the background.
    Panning {
        /// Screen-space pointer position at pointer-down.
        start_screen: Point,
        /// Camera pan at pointer-down.
        start_pan: Point,
    },
    /// The user is moving a shape.
    DraggingShape {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// Shape position minus pointer world position at pointer-down.
        grab_offset: Point,
    },
}

impl InputState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
