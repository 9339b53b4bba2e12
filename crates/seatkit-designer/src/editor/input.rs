//! Pointer and wheel handling for the editor.
//!
//! Every handler takes screen-pixel coordinates and converts to world
//! space exactly once at entry. Handlers run synchronously and mutate
//! the editor in place; there is no suspension inside any of them.

use super::{Editor, InteractionState, Tool};
use crate::elements::{Element, PolygonArea, Seat, Section, Stage};
use crate::handles::{anchor_handles, handle_at, vertex_handles, HandleDirection, ResizeHandle};
use seatkit_core::constants::{MIN_RECT_SIZE, MIN_SEAT_SIZE, POLYGON_CLOSE_DISTANCE};
use seatkit_core::geometry::Point;

impl Editor {
    /// Pointer-down at a screen position.
    pub fn pointer_down(&mut self, screen: Point) {
        let world = self.viewport().screen_to_world(&screen);
        match self.tool() {
            Tool::Pan => {
                self.set_interaction(InteractionState::Panning {
                    start_pan: self.viewport().pan(),
                    start_pointer: screen,
                });
            }
            Tool::Seat => self.place(Element::Seat(self.new_seat(world)), world),
            Tool::Section => self.place(Element::Section(self.new_section(world)), world),
            Tool::Stage => self.place(Element::Stage(Stage::new(world.x, world.y)), world),
            Tool::Polygon => self.polygon_point(world),
            Tool::Select => self.select_down(screen, world),
            Tool::PaintCategory => self.paint_category(world),
        }
    }

    /// Pointer-move to a screen position. Only meaningful while a drag
    /// state is active.
    pub fn pointer_move(&mut self, screen: Point) {
        match self.interaction().clone() {
            InteractionState::Panning {
                start_pan,
                start_pointer,
            } => {
                self.viewport_mut().set_pan(
                    start_pan.x + (screen.x - start_pointer.x),
                    start_pan.y + (screen.y - start_pointer.y),
                );
            }
            InteractionState::MovingElement {
                id,
                start_world,
                snapshot,
            } => {
                let world = self.viewport().screen_to_world(&screen);
                let mut moved = snapshot;
                moved.translate(world.x - start_world.x, world.y - start_world.y);
                if let Some(element) = self.canvas_mut().get_mut(&id) {
                    *element = moved;
                }
                self.mark_dirty();
            }
            InteractionState::ResizingElement {
                id,
                handle,
                start_screen,
                snapshot,
            } => {
                let scale = self.viewport().scale();
                let dx = (screen.x - start_screen.x) / scale;
                let dy = (screen.y - start_screen.y) / scale;
                if let Some(element) = self.canvas_mut().get_mut(&id) {
                    apply_resize(element, &snapshot, handle, dx, dy);
                }
                self.mark_dirty();
            }
            InteractionState::Idle | InteractionState::ConstructingPolygon { .. } => {}
        }
    }

    /// Pointer-up: every drag state returns to idle. Polygon
    /// construction is not a drag and survives.
    pub fn pointer_up(&mut self) {
        match self.interaction() {
            InteractionState::Panning { .. }
            | InteractionState::MovingElement { .. }
            | InteractionState::ResizingElement { .. } => {
                self.set_interaction(InteractionState::Idle);
            }
            InteractionState::Idle | InteractionState::ConstructingPolygon { .. } => {}
        }
    }

    /// Double-click: closes an in-progress polygon with the points
    /// gathered so far, no proximity requirement.
    pub fn double_click(&mut self, _screen: Point) {
        if let InteractionState::ConstructingPolygon { points } = self.interaction() {
            if points.len() > 2 {
                let points = points.clone();
                self.commit_polygon(points);
            }
        }
    }

    /// Wheel event: multiplicative rescale, clamped, pan unchanged.
    /// Independent of the drag state.
    pub fn wheel(&mut self, scroll_up: bool) {
        self.viewport_mut().zoom_wheel(scroll_up);
    }

    // --- tool-specific pointer-down paths --------------------------------

    fn new_seat(&self, world: Point) -> Seat {
        let mut seat = Seat::new(world.x, world.y, self.canvas().next_seat_number());
        seat.category_id = self.canvas().categories().active_id().map(String::from);
        seat
    }

    fn new_section(&self, world: Point) -> Section {
        let mut section = Section::new(world.x, world.y, self.canvas().next_section_label());
        section.category_id = self.canvas().categories().active_id().map(String::from);
        section
    }

    /// Placement tools create over empty space only; clicking an
    /// existing element with a placement tool does nothing, so stray
    /// clicks never stack elements.
    fn place(&mut self, element: Element, world: Point) {
        if self.canvas().element_at(&world).is_some() {
            return;
        }
        let id = self.canvas_mut().add_element(element);
        self.select(Some(id));
        self.mark_dirty();
    }

    fn polygon_point(&mut self, world: Point) {
        match self.interaction().clone() {
            InteractionState::ConstructingPolygon { mut points } => {
                let close_distance = POLYGON_CLOSE_DISTANCE / self.viewport().scale();
                if points.len() > 2 && world.distance_to(&points[0]) <= close_distance {
                    self.commit_polygon(points);
                } else {
                    points.push(world);
                    self.set_interaction(InteractionState::ConstructingPolygon { points });
                }
            }
            _ => {
                self.set_interaction(InteractionState::ConstructingPolygon {
                    points: vec![world],
                });
            }
        }
    }

    fn commit_polygon(&mut self, points: Vec<Point>) {
        let mut polygon = PolygonArea::new(points, self.canvas().next_area_label());
        polygon.category_id = self.canvas().categories().active_id().map(String::from);
        let id = self.canvas_mut().add_element(Element::Polygon(polygon));
        self.select(Some(id));
        self.set_interaction(InteractionState::Idle);
        self.mark_dirty();
    }

    fn select_down(&mut self, screen: Point, world: Point) {
        // Resize handles of the current selection win over element hits.
        if let Some(selected) = self.selected_element() {
            let handles = match selected {
                Element::Polygon(p) => vertex_handles(&p.points, self.viewport()),
                other => anchor_handles(&other.bounds(), self.viewport()),
            };
            if let Some(handle) = handle_at(&handles, &screen) {
                let id = selected.id().to_string();
                let snapshot = selected.clone();
                self.set_interaction(InteractionState::ResizingElement {
                    id,
                    handle,
                    start_screen: screen,
                    snapshot,
                });
                return;
            }
        }

        match self.canvas().element_at(&world) {
            Some(element) => {
                let id = element.id().to_string();
                let snapshot = element.clone();
                self.select(Some(id.clone()));
                self.set_interaction(InteractionState::MovingElement {
                    id,
                    start_world: world,
                    snapshot,
                });
            }
            None => self.select(None),
        }
    }

    /// Paint-category: assigns the active category to the clicked
    /// element immediately, no drag phase. Requires an active category;
    /// stages are never paintable.
    fn paint_category(&mut self, world: Point) {
        let Some(active) = self.canvas().categories().active_id().map(String::from) else {
            return;
        };
        let Some(target) = self.canvas().element_at(&world) else {
            return;
        };
        if !target.accepts_category() {
            return;
        }
        let id = target.id().to_string();
        if self
            .canvas_mut()
            .bulk_assign_category(&[id], &active)
            .is_ok()
        {
            self.mark_dirty();
        }
    }
}

/// Applies a resize drag to `element`, computing from the pointer-down
/// `snapshot` so repeated moves do not accumulate error.
fn apply_resize(element: &mut Element, snapshot: &Element, handle: ResizeHandle, dx: f64, dy: f64) {
    match (element, snapshot, handle) {
        (Element::Seat(seat), Element::Seat(snap), ResizeHandle::Anchor(dir)) => {
            seat.size = (snap.size + outward_growth(dir, dx, dy)).max(MIN_SEAT_SIZE);
        }
        (Element::Section(section), Element::Section(snap), ResizeHandle::Anchor(dir)) => {
            let (x, y, w, h) =
                resize_rect(dir, snap.x, snap.y, snap.width, snap.height, dx, dy);
            section.x = x;
            section.y = y;
            section.width = w;
            section.height = h;
        }
        (Element::Stage(stage), Element::Stage(snap), ResizeHandle::Anchor(dir)) => {
            let (x, y, w, h) =
                resize_rect(dir, snap.x, snap.y, snap.width, snap.height, dx, dy);
            stage.x = x;
            stage.y = y;
            stage.width = w;
            stage.height = h;
        }
        (Element::Polygon(polygon), Element::Polygon(snap), ResizeHandle::Vertex(i)) => {
            if let (Some(p), Some(s)) = (polygon.points.get_mut(i), snap.points.get(i)) {
                *p = s.translated(dx, dy);
            }
        }
        _ => {}
    }
}

/// The uniform growth a seat handle drag produces: the drag component
/// pointing out of the shape for each edge the handle moves, taking the
/// larger when a corner moves both.
fn outward_growth(dir: HandleDirection, dx: f64, dy: f64) -> f64 {
    let mut growth = f64::NEG_INFINITY;
    if dir.moves_left() {
        growth = growth.max(-dx);
    }
    if dir.moves_right() {
        growth = growth.max(dx);
    }
    if dir.moves_top() {
        growth = growth.max(-dy);
    }
    if dir.moves_bottom() {
        growth = growth.max(dy);
    }
    if growth.is_finite() {
        growth
    } else {
        0.0
    }
}

/// Adjusts a rectangle's edges per the grabbed handle. Each edge is
/// handled independently, with width/height floored at
/// [`MIN_RECT_SIZE`]; a floored edge drags its origin along so the
/// opposite edge never moves.
fn resize_rect(
    dir: HandleDirection,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    dx: f64,
    dy: f64,
) -> (f64, f64, f64, f64) {
    let (mut nx, mut ny, mut nw, mut nh) = (x, y, width, height);
    if dir.moves_left() {
        nw = (width - dx).max(MIN_RECT_SIZE);
        nx = x + (width - nw);
    }
    if dir.moves_right() {
        nw = (width + dx).max(MIN_RECT_SIZE);
    }
    if dir.moves_top() {
        nh = (height - dy).max(MIN_RECT_SIZE);
        ny = y + (height - nh);
    }
    if dir.moves_bottom() {
        nh = (height + dy).max(MIN_RECT_SIZE);
    }
    (nx, ny, nw, nh)
}
