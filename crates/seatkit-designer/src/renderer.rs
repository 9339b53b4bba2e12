//! Raster renderer for the layout editor.
//!
//! A deterministic function of (categories, elements, viewport,
//! interaction state) producing an image: grid, then every committed
//! element in draw order, then selection highlighting and resize
//! handles, then the in-progress polygon. Uses tiny-skia for
//! anti-aliased 2D drawing and converts to an `image::RgbImage` for
//! export.

use image::{Rgb as ImageRgb, RgbImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::canvas::VenueCanvas;
use crate::editor::{Editor, InteractionState};
use crate::elements::Element;
use crate::handles::{anchor_handles, vertex_handles};
use crate::viewport::Viewport;
use seatkit_core::color::{parse_hex_color, Rgb};
use seatkit_core::constants::{GRID_SPACING, HANDLE_SIZE};
use seatkit_core::geometry::Point;

/// Alpha applied to elements whose bookable flag is off.
const UNBOOKABLE_ALPHA: u8 = 102; // 40%

fn bg_color() -> Color {
    Color::from_rgba8(250, 250, 250, 255)
}
fn grid_color() -> Color {
    Color::from_rgba8(225, 228, 232, 255)
}
fn selection_color() -> Color {
    Color::from_rgba8(255, 235, 59, 255)
}
fn construction_color() -> Color {
    Color::from_rgba8(52, 152, 219, 255)
}

/// Renders the full editor state.
pub fn render_editor(editor: &Editor, width: u32, height: u32) -> RgbImage {
    let in_progress = match editor.interaction() {
        InteractionState::ConstructingPolygon { points } => Some(points.as_slice()),
        _ => None,
    };
    render_layout(
        editor.canvas(),
        editor.viewport(),
        editor.selected_id(),
        in_progress,
        editor.show_grid(),
        width,
        height,
    )
}

/// Renders a layout from explicit state. Pure: equal inputs produce
/// equal images.
pub fn render_layout(
    canvas: &VenueCanvas,
    viewport: &Viewport,
    selected_id: Option<&str>,
    in_progress: Option<&[Point]>,
    show_grid: bool,
    width: u32,
    height: u32,
) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(bg_color());

    let scale = viewport.scale() as f32;
    let pan = viewport.pan();
    // World -> screen: scale then translate, no axis flip.
    let transform = Transform::from_scale(scale, scale).post_translate(pan.x as f32, pan.y as f32);

    if show_grid {
        draw_grid(&mut pixmap, viewport, width, height);
    }

    for element in canvas.elements() {
        draw_element(&mut pixmap, canvas, element, transform);
    }

    if let Some(selected) = selected_id.and_then(|id| canvas.get(id)) {
        draw_selection(&mut pixmap, selected, viewport, transform);
    }

    if let Some(points) = in_progress {
        draw_construction(&mut pixmap, points, viewport);
    }

    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        ImageRgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

/// Grid lines every `GRID_SPACING * scale` screen pixels, offset by
/// `pan mod spacing` so the grid pans with the viewport.
fn draw_grid(pixmap: &mut Pixmap, viewport: &Viewport, width: u32, height: u32) {
    let spacing = GRID_SPACING * viewport.scale();
    if spacing < 2.0 {
        return;
    }
    let pan = viewport.pan();
    let offset_x = pan.x.rem_euclid(spacing);
    let offset_y = pan.y.rem_euclid(spacing);

    let mut pb = PathBuilder::new();
    let mut x = offset_x;
    while x < width as f64 {
        pb.move_to(x as f32, 0.0);
        pb.line_to(x as f32, height as f32);
        x += spacing;
    }
    let mut y = offset_y;
    while y < height as f64 {
        pb.move_to(0.0, y as f32);
        pb.line_to(width as f32, y as f32);
        y += spacing;
    }

    if let Some(path) = pb.finish() {
        let mut paint = Paint::default();
        paint.set_color(grid_color());
        paint.anti_alias = false;
        let stroke = Stroke {
            width: 1.0,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

/// The fill for an element: its category's color (default blue when the
/// reference is absent or does not resolve), the stage's own color, and
/// a 40% alpha treatment when not bookable.
fn element_fill(canvas: &VenueCanvas, element: &Element) -> Color {
    let rgb = match element {
        Element::Stage(stage) => parse_hex_color(&stage.color).unwrap_or(Rgb::default_element()),
        other => other
            .category_id()
            .and_then(|id| canvas.categories().get(id))
            .and_then(|cat| parse_hex_color(&cat.color))
            .unwrap_or(Rgb::default_element()),
    };
    let alpha = if element.is_bookable() {
        255
    } else {
        UNBOOKABLE_ALPHA
    };
    Color::from_rgba8(rgb.r, rgb.g, rgb.b, alpha)
}

fn draw_element(pixmap: &mut Pixmap, canvas: &VenueCanvas, element: &Element, world: Transform) {
    let mut paint = Paint::default();
    paint.set_color(element_fill(canvas, element));
    paint.anti_alias = true;

    match element {
        Element::Seat(seat) => {
            fill_rect(pixmap, &paint, seat.x, seat.y, seat.size, seat.size, world);
        }
        Element::Section(section) => {
            fill_rect(
                pixmap,
                &paint,
                section.x,
                section.y,
                section.width,
                section.height,
                world,
            );
        }
        Element::Stage(stage) => {
            fill_rect(
                pixmap,
                &paint,
                stage.x,
                stage.y,
                stage.width,
                stage.height,
                world,
            );
        }
        Element::Polygon(polygon) => {
            let mut pb = PathBuilder::new();
            for (i, p) in polygon.points.iter().enumerate() {
                if i == 0 {
                    pb.move_to(p.x as f32, p.y as f32);
                } else {
                    pb.line_to(p.x as f32, p.y as f32);
                }
            }
            pb.close();
            if let Some(path) = pb.finish() {
                pixmap.fill_path(&path, &paint, FillRule::EvenOdd, world, None);
            }
        }
    }
}

fn fill_rect(
    pixmap: &mut Pixmap,
    paint: &Paint,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    world: Transform,
) {
    if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
        let path = PathBuilder::from_rect(rect);
        pixmap.fill_path(&path, paint, FillRule::Winding, world, None);
    }
}

/// Highlighted stroke around the selection plus its resize handles.
/// Handles are drawn in screen space so they stay a constant size at
/// every zoom level.
fn draw_selection(pixmap: &mut Pixmap, element: &Element, viewport: &Viewport, world: Transform) {
    let bounds = element.bounds();
    let mut paint = Paint::default();
    paint.set_color(selection_color());
    paint.anti_alias = true;

    if let Some(rect) = Rect::from_ltrb(
        bounds.min_x as f32,
        bounds.min_y as f32,
        bounds.max_x as f32,
        bounds.max_y as f32,
    ) {
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width: 2.0 / viewport.scale() as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, world, None);
    }

    let handles = match element {
        Element::Polygon(polygon) => vertex_handles(&polygon.points, viewport),
        other => anchor_handles(&other.bounds(), viewport),
    };
    for (_, center) in handles {
        fill_handle(pixmap, &paint, &center);
    }
}

/// In-progress polygon: vertex markers plus connecting strokes, drawn
/// in screen space.
fn draw_construction(pixmap: &mut Pixmap, points: &[Point], viewport: &Viewport) {
    if points.is_empty() {
        return;
    }
    let mut paint = Paint::default();
    paint.set_color(construction_color());
    paint.anti_alias = true;

    let screen: Vec<Point> = points.iter().map(|p| viewport.world_to_screen(p)).collect();

    if screen.len() > 1 {
        let mut pb = PathBuilder::new();
        pb.move_to(screen[0].x as f32, screen[0].y as f32);
        for p in &screen[1..] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 1.5,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    for p in &screen {
        fill_handle(pixmap, &paint, p);
    }
}

fn fill_handle(pixmap: &mut Pixmap, paint: &Paint, center: &Point) {
    let half = (HANDLE_SIZE / 2.0) as f32;
    if let Some(rect) = Rect::from_xywh(
        center.x as f32 - half,
        center.y as f32 - half,
        HANDLE_SIZE as f32,
        HANDLE_SIZE as f32,
    ) {
        let path = PathBuilder::from_rect(rect);
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
    }
}
