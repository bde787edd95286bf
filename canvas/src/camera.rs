//! Viewport camera: pan offset, zoom scale, and pointer-anchored zoom.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Scale up by [`ZOOM_STEP`].
    In,
    /// Scale down by [`ZOOM_STEP`].
    Out,
}

impl ZoomDirection {
    /// Map a vertical wheel delta to a zoom direction.
    ///
    /// Only a strictly positive delta (wheel rolled away from the user) zooms
    /// in; zero and negative deltas zoom out.
    #[must_use]
    pub fn from_wheel_delta(dy: f64) -> Self {
        if dy > 0.0 { Self::In } else { Self::Out }
    }
}

/// Camera state for pan/zoom on the canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Pan offset as a point.
    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Replace the pan offset. Zoom is untouched.
    pub fn pan_to(&mut self, offset: Point) {
        self.pan_x = offset.x;
        self.pan_y = offset.y;
    }

    /// This camera after one zoom step anchored at `pointer` (screen space).
    #[must_use]
    pub fn zoomed_at(self, pointer: Point, direction: ZoomDirection) -> Self {
        zoom_about(pointer, direction, self)
    }

    /// Zoom as a rounded percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }
}

/// Apply one zoom step to `camera`, keeping the world point under `pointer`
/// fixed on screen.
///
/// The new scale is clamped to `[MIN_ZOOM, MAX_ZOOM]`. The anchor holds
/// either way, so a clamped step leaves the view where it was.
#[must_use]
pub fn zoom_about(pointer: Point, direction: ZoomDirection, camera: Camera) -> Camera {
    let new_zoom = match direction {
        ZoomDirection::In => camera.zoom * ZOOM_STEP,
        ZoomDirection::Out => camera.zoom / ZOOM_STEP,
    }
    .clamp(MIN_ZOOM, MAX_ZOOM);

    let anchor = camera.screen_to_world(pointer);
    Camera {
        pan_x: pointer.x - anchor.x * new_zoom,
        pan_y: pointer.y - anchor.y * new_zoom,
        zoom: new_zoom,
    }
}
