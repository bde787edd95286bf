//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Multiplicative zoom factor applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.05;

/// Smallest zoom the camera will reach.
pub const MIN_ZOOM: f64 = 0.01;

/// Largest zoom the camera will reach.
pub const MAX_ZOOM: f64 = 100.0;

// ── Spawning ────────────────────────────────────────────────────

/// Lower bound (inclusive) of the spawn range on each axis, in world units.
pub const SPAWN_MIN: f64 = 100.0;

/// Width of the spawn range on each axis; new shapes land in `[SPAWN_MIN, SPAWN_MIN + SPAWN_SPAN)`.
pub const SPAWN_SPAN: f64 = 300.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Side length of a rectangle (drawn as a square).
pub const RECT_SIDE: f64 = 100.0;

/// Radius of a circle.
pub const CIRCLE_RADIUS: f64 = 50.0;

/// Circumradius of a triangle.
pub const TRIANGLE_RADIUS: f64 = 50.0;

pub const RECT_FILL: &str = "red";
pub const CIRCLE_FILL: &str = "blue";
pub const TRIANGLE_FILL: &str = "green";

// ── Surface ─────────────────────────────────────────────────────

/// Canvas background color.
pub const BACKGROUND: &str = "#f0f0f0";
