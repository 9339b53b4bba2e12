//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between screen pixels and world coordinates and
//! manages the zoom/pan state. Both spaces are top-left origin, Y-down,
//! so the mapping is `screen = world * scale + pan` with no axis flip.

use std::fmt;

use seatkit_core::constants::{VIEW_PADDING, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP_IN, ZOOM_STEP_OUT};
use seatkit_core::geometry::{self, Bounds, Point};

/// The viewport transformation state (scale and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan: Point,
}

impl Viewport {
    /// Creates a viewport at 1:1 scale with no pan offset.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan: Point::new(0.0, 0.0),
        }
    }

    /// Gets the current scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamped to [[`ZOOM_MIN`], [`ZOOM_MAX`]].
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Gets the pan offset in screen pixels.
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan = Point::new(x, y);
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Applies one wheel notch: scale is multiplied by 1.1 (scroll up)
    /// or 0.9 (scroll down) and clamped. The pan offset is left
    /// unchanged, so zoom is anchored at the canvas origin rather than
    /// the cursor.
    pub fn zoom_wheel(&mut self, scroll_up: bool) {
        let factor = if scroll_up { ZOOM_STEP_IN } else { ZOOM_STEP_OUT };
        self.set_scale(self.scale * factor);
    }

    /// Zooms in one step (same factor as scroll up).
    pub fn zoom_in(&mut self) {
        self.zoom_wheel(true);
    }

    /// Zooms out one step (same factor as scroll down).
    pub fn zoom_out(&mut self) {
        self.zoom_wheel(false);
    }

    /// Converts a screen pixel to world coordinates.
    pub fn screen_to_world(&self, p: &Point) -> Point {
        geometry::screen_to_world(p, self.scale, &self.pan)
    }

    /// Converts a world coordinate to screen pixels.
    pub fn world_to_screen(&self, p: &Point) -> Point {
        geometry::world_to_screen(p, self.scale, &self.pan)
    }

    /// Fits the given world bounds into a view of the given pixel size,
    /// centering the content and reserving [`VIEW_PADDING`] of the view
    /// on each side. Degenerate bounds are ignored.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, view_width: f64, view_height: f64) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - VIEW_PADDING * 2.0;
        let scale_x = view_width * padding_factor / bounds.width();
        let scale_y = view_height * padding_factor / bounds.height();
        self.scale = scale_x.min(scale_y).clamp(ZOOM_MIN, ZOOM_MAX);

        let content_w = bounds.width() * self.scale;
        let content_h = bounds.height() * self.scale;
        self.pan = Point::new(
            (view_width - content_w) / 2.0 - bounds.min_x * self.scale,
            (view_height - content_h) / 2.0 - bounds.min_y * self.scale,
        );
    }

    /// Resets to 1:1 scale and zero pan.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan = Point::new(0.0, 0.0);
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.pan.x, self.pan.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
