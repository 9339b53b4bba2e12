//! Resize handles for the selected element.
//!
//! Rectangular elements expose 8 anchors on their bounding box (4
//! corners + 4 edge midpoints); polygons expose one handle per vertex.
//! Handle positions are computed in screen space so their size is
//! constant regardless of zoom.

use crate::viewport::Viewport;
use seatkit_core::constants::HANDLE_HIT_RADIUS;
use seatkit_core::geometry::{Bounds, Point};

/// Anchor position of a bounding-box resize handle, named by compass
/// direction with north at the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleDirection {
    Nw,
    N,
    Ne,
    W,
    E,
    Sw,
    S,
    Se,
}

impl HandleDirection {
    pub const ALL: [HandleDirection; 8] = [
        HandleDirection::Nw,
        HandleDirection::N,
        HandleDirection::Ne,
        HandleDirection::W,
        HandleDirection::E,
        HandleDirection::Sw,
        HandleDirection::S,
        HandleDirection::Se,
    ];

    /// Dragging this handle moves the left edge (x and width).
    pub fn moves_left(&self) -> bool {
        matches!(
            self,
            HandleDirection::Nw | HandleDirection::W | HandleDirection::Sw
        )
    }

    /// Dragging this handle moves the right edge (width only).
    pub fn moves_right(&self) -> bool {
        matches!(
            self,
            HandleDirection::Ne | HandleDirection::E | HandleDirection::Se
        )
    }

    /// Dragging this handle moves the top edge (y and height).
    pub fn moves_top(&self) -> bool {
        matches!(
            self,
            HandleDirection::Nw | HandleDirection::N | HandleDirection::Ne
        )
    }

    /// Dragging this handle moves the bottom edge (height only).
    pub fn moves_bottom(&self) -> bool {
        matches!(
            self,
            HandleDirection::Sw | HandleDirection::S | HandleDirection::Se
        )
    }

    /// Anchor position on a world-space bounding box.
    pub fn anchor_on(&self, b: &Bounds) -> Point {
        let cx = (b.min_x + b.max_x) / 2.0;
        let cy = (b.min_y + b.max_y) / 2.0;
        match self {
            HandleDirection::Nw => Point::new(b.min_x, b.min_y),
            HandleDirection::N => Point::new(cx, b.min_y),
            HandleDirection::Ne => Point::new(b.max_x, b.min_y),
            HandleDirection::W => Point::new(b.min_x, cy),
            HandleDirection::E => Point::new(b.max_x, cy),
            HandleDirection::Sw => Point::new(b.min_x, b.max_y),
            HandleDirection::S => Point::new(cx, b.max_y),
            HandleDirection::Se => Point::new(b.max_x, b.max_y),
        }
    }
}

/// A grabbable resize handle: a bounding-box anchor, or a specific
/// polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Anchor(HandleDirection),
    Vertex(usize),
}

/// The 8 anchor handles of a world-space bounding box, in screen space.
pub fn anchor_handles(bounds: &Bounds, viewport: &Viewport) -> Vec<(ResizeHandle, Point)> {
    HandleDirection::ALL
        .iter()
        .map(|dir| {
            (
                ResizeHandle::Anchor(*dir),
                viewport.world_to_screen(&dir.anchor_on(bounds)),
            )
        })
        .collect()
}

/// One handle per polygon vertex, in screen space.
pub fn vertex_handles(points: &[Point], viewport: &Viewport) -> Vec<(ResizeHandle, Point)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (ResizeHandle::Vertex(i), viewport.world_to_screen(p)))
        .collect()
}

/// Returns the handle under a screen-space pointer, if any. The hit
/// area is a square of half-width [`HANDLE_HIT_RADIUS`] around each
/// handle center.
pub fn handle_at(handles: &[(ResizeHandle, Point)], screen: &Point) -> Option<ResizeHandle> {
    handles
        .iter()
        .find(|(_, center)| {
            (screen.x - center.x).abs() <= HANDLE_HIT_RADIUS
                && (screen.y - center.y).abs() <= HANDLE_HIT_RADIUS
        })
        .map(|(handle, _)| *handle)
}
