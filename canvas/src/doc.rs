//! Document model: shapes and the in-memory store that owns them.
//!
//! This module defines what is on the canvas (`Shape`, `ShapeKind`) and the
//! runtime store that owns every live shape (`ShapeStore`). Shapes are only
//! ever appended and moved; nothing removes them. The renderer walks the store
//! in insertion order, which doubles as the stacking order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::camera::Point;
use crate::consts::{
    CIRCLE_FILL, CIRCLE_RADIUS, RECT_FILL, RECT_SIDE, SPAWN_MIN, SPAWN_SPAN, TRIANGLE_FILL, TRIANGLE_RADIUS,
};

/// Identifier of a shape, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Axis-aligned square anchored at its top-left corner.
    Rectangle,
    /// Circle centred on the shape position.
    Circle,
    /// Regular triangle centred on the shape position, apex up.
    Triangle,
}

impl ShapeKind {
    /// Every kind, in the order the picker lists them.
    pub const ALL: [Self; 3] = [Self::Rectangle, Self::Circle, Self::Triangle];

    /// Stable lowercase name, used as the picker option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }

    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::Rectangle => RECT_FILL,
            Self::Circle => CIRCLE_FILL,
            Self::Triangle => TRIANGLE_FILL,
        }
    }

    /// Characteristic size: side length for rectangles, radius otherwise.
    #[must_use]
    pub fn size(self) -> f64 {
        match self {
            Self::Rectangle => RECT_SIDE,
            Self::Circle => CIRCLE_RADIUS,
            Self::Triangle => TRIANGLE_RADIUS,
        }
    }
}

/// Returned when a string names no known shape kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape kind: {0:?}")]
pub struct UnknownShapeKind(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownShapeKind(s.to_owned()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shape on the board.
///
/// `id` and `kind` are fixed at creation; only the position moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    /// World x. Top-left corner for rectangles, centre otherwise.
    pub x: f64,
    /// World y. Top-left corner for rectangles, centre otherwise.
    pub y: f64,
}

impl Shape {
    #[must_use]
    pub fn new(id: ShapeId, kind: ShapeKind, x: f64, y: f64) -> Self {
        Self { id, kind, x, y }
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered, append-only store of shapes.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a new shape of `kind` at a random position in the spawn range
    /// and return a copy of it.
    ///
    /// The id is one more than the number of shapes already present.
    pub fn add<R: Rng>(&mut self, kind: ShapeKind, rng: &mut R) -> Shape {
        let x = rng.random_range(SPAWN_MIN..SPAWN_MIN + SPAWN_SPAN);
        let y = rng.random_range(SPAWN_MIN..SPAWN_MIN + SPAWN_SPAN);
        self.push(kind, x, y)
    }

    /// Append a new shape of `kind` at an explicit position.
    pub fn push(&mut self, kind: ShapeKind, x: f64, y: f64) -> Shape {
        let next = u32::try_from(self.shapes.len()).unwrap_or(u32::MAX).saturating_add(1);
        let shape = Shape::new(ShapeId(next), kind, x, y);
        self.shapes.push(shape);
        shape
    }

    /// Move the shape with `id` to `(x, y)`. Returns false if no shape has that id.
    pub fn update_position(&mut self, id: ShapeId, x: f64, y: f64) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shape.x = x;
        shape.y = y;
        true
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Shapes in insertion order (bottom of the stack first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
