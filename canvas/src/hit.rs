#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::f64::consts::TAU;

use crate::camera::Point;
use crate::doc::{Shape, ShapeId, ShapeKind, ShapeStore};

/// Vertices of the regular triangle centred on `center` with circumradius
/// `radius`, first vertex straight up, then clockwise on screen.
#[must_use]
pub fn triangle_vertices(center: Point, radius: f64) -> [Point; 3] {
    let vertex = |n: f64| {
        let angle = n * TAU / 3.0;
        Point::new(center.x + radius * angle.sin(), center.y - radius * angle.cos())
    };
    [vertex(0.0), vertex(1.0), vertex(2.0)]
}

/// Whether `world_pt` lies on or inside `shape`.
#[must_use]
pub fn contains(shape: &Shape, world_pt: Point) -> bool {
    let size = shape.kind().size();
    match shape.kind() {
        ShapeKind::Rectangle => {
            world_pt.x >= shape.x
                && world_pt.x <= shape.x + size
                && world_pt.y >= shape.y
                && world_pt.y <= shape.y + size
        }
        ShapeKind::Circle => (world_pt.x - shape.x).hypot(world_pt.y - shape.y) <= size,
        ShapeKind::Triangle => point_in_triangle(world_pt, triangle_vertices(shape.position(), size)),
    }
}

/// Topmost shape under `world_pt`, if any.
///
/// Later shapes are drawn above earlier ones, so the scan runs newest first.
#[must_use]
pub fn hit_test(world_pt: Point, store: &ShapeStore) -> Option<ShapeId> {
    store
        .iter()
        .rev()
        .find(|shape| contains(shape, world_pt))
        .map(Shape::id)
}

fn point_in_triangle(p: Point, [a, b, c]: [Point; 3]) -> bool {
    let d1 = cross(p, a, b);
    let d2 = cross(p, b, c);
    let d3 = cross(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

fn cross(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}
