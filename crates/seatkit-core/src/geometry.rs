//! Geometry and hit-testing for the layout canvas.
//!
//! Pure functions over explicit parameters: coordinate-space transforms
//! between world (venue) coordinates and screen pixels, and containment
//! tests for the shapes the editor places. Both spaces are top-left
//! origin with Y growing downward, so the transform carries no axis flip.

use serde::{Deserialize, Serialize};

/// A 2D point, in world or screen coordinates depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Returns this point translated by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a vertex list. Returns a zero-size box at the origin
    /// for an empty list.
    pub fn of_points(points: &[Point]) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if min_x.is_infinite() {
            Bounds::new(0.0, 0.0, 0.0, 0.0)
        } else {
            Bounds::new(min_x, min_y, max_x, max_y)
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Inclusive containment test, consistent with [`point_in_rect`].
    pub fn contains(&self, p: &Point) -> bool {
        point_in_rect(p, self.min_x, self.min_y, self.width(), self.height())
    }

    /// Smallest box covering both operands.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

/// Converts a world coordinate to screen pixels: `p * scale + pan`.
pub fn world_to_screen(p: &Point, scale: f64, pan: &Point) -> Point {
    Point::new(p.x * scale + pan.x, p.y * scale + pan.y)
}

/// Converts a screen pixel to world coordinates. Exact inverse of
/// [`world_to_screen`]: `(p - pan) / scale`.
pub fn screen_to_world(p: &Point, scale: f64, pan: &Point) -> Point {
    Point::new((p.x - pan.x) / scale, (p.y - pan.y) / scale)
}

/// Tests whether a point lies in the rectangle at (x, y) with the given
/// width and height. Inclusive on all four edges: a point exactly on the
/// boundary is inside.
pub fn point_in_rect(p: &Point, x: f64, y: f64, width: f64, height: f64) -> bool {
    p.x >= x && p.x <= x + width && p.y >= y && p.y <= y + height
}

/// Tests whether a point lies inside a polygon using even-odd ray
/// casting over the vertex ring in the given order.
///
/// A point exactly on a vertex or an edge is not guaranteed to be
/// inside; callers needing a boundary hit should test against the
/// polygon's bounds first. Behavior is undefined for self-intersecting
/// rings; the editor only constructs simple polygons.
pub fn point_in_polygon(p: &Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (vi, vj) = (&vertices[i], &vertices[j]);
        let crosses = (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the vertex coordinates. Used for label placement
/// only; not an area-weighted centroid.
pub fn polygon_centroid(vertices: &[Point]) -> Point {
    if vertices.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}
