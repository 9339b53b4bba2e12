//! Placed elements of the venue canvas.

use seatkit_core::constants::{
    DEFAULT_SEAT_SIZE, DEFAULT_SECTION_HEIGHT, DEFAULT_SECTION_WIDTH, DEFAULT_STAGE_COLOR,
    DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH,
};
use seatkit_core::geometry::{point_in_polygon, point_in_rect, Bounds, Point};
use uuid::Uuid;

/// Generates a fresh unique element id.
pub fn new_element_id() -> String {
    Uuid::new_v4().to_string()
}

/// Kinds of elements that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Seat,
    Section,
    Polygon,
    Stage,
}

/// A single bookable seat, drawn as a square of edge `size` with its
/// top-left corner at (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub id: String,
    pub category_id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub number: String,
    pub section: Option<String>,
    pub row: Option<String>,
    pub is_bookable: bool,
}

impl Seat {
    pub fn new(x: f64, y: f64, number: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            category_id: None,
            x,
            y,
            size: DEFAULT_SEAT_SIZE,
            number: number.into(),
            section: None,
            row: None,
            is_bookable: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.x + self.size, self.y + self.size)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        point_in_rect(p, self.x, self.y, self.size, self.size)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// A rectangular general-admission block with a capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub category_id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub capacity: u32,
    pub is_bookable: bool,
}

impl Section {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            id: new_element_id(),
            category_id: None,
            x,
            y,
            width: DEFAULT_SECTION_WIDTH,
            height: DEFAULT_SECTION_HEIGHT,
            label: label.into(),
            capacity: 1,
            is_bookable: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        point_in_rect(p, self.x, self.y, self.width, self.height)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// A free-form admission area outlined by a simple polygon.
///
/// Persisted polygons always carry at least three vertices; the
/// in-progress point list during construction lives in the editor, not
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonArea {
    pub id: String,
    pub category_id: Option<String>,
    pub points: Vec<Point>,
    pub label: String,
    pub capacity: u32,
    pub is_bookable: bool,
}

impl PolygonArea {
    pub fn new(points: Vec<Point>, label: impl Into<String>) -> Self {
        debug_assert!(points.len() >= 3, "polygon must have at least 3 points");
        Self {
            id: new_element_id(),
            category_id: None,
            points,
            label: label.into(),
            capacity: 1,
            is_bookable: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::of_points(&self.points)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        point_in_polygon(p, &self.points)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }
}

/// The stage. Exactly one visual fixture: it has its own color, never a
/// category, capacity, or bookable flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub label: String,
}

impl Stage {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: new_element_id(),
            x,
            y,
            width: DEFAULT_STAGE_WIDTH,
            height: DEFAULT_STAGE_HEIGHT,
            color: DEFAULT_STAGE_COLOR.to_string(),
            label: "Stage".to_string(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        point_in_rect(p, self.x, self.y, self.width, self.height)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Enum wrapper over all placeable elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Seat(Seat),
    Section(Section),
    Polygon(PolygonArea),
    Stage(Stage),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Seat(_) => ElementKind::Seat,
            Element::Section(_) => ElementKind::Section,
            Element::Polygon(_) => ElementKind::Polygon,
            Element::Stage(_) => ElementKind::Stage,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Element::Seat(e) => &e.id,
            Element::Section(e) => &e.id,
            Element::Polygon(e) => &e.id,
            Element::Stage(e) => &e.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            Element::Seat(e) => e.id = id,
            Element::Section(e) => e.id = id,
            Element::Polygon(e) => e.id = id,
            Element::Stage(e) => e.id = id,
        }
    }

    /// The category reference, always `None` for the stage.
    pub fn category_id(&self) -> Option<&str> {
        match self {
            Element::Seat(e) => e.category_id.as_deref(),
            Element::Section(e) => e.category_id.as_deref(),
            Element::Polygon(e) => e.category_id.as_deref(),
            Element::Stage(_) => None,
        }
    }

    /// Rewrites the category reference. A no-op for the stage, which
    /// never carries one.
    pub fn set_category_id(&mut self, category_id: Option<String>) {
        match self {
            Element::Seat(e) => e.category_id = category_id,
            Element::Section(e) => e.category_id = category_id,
            Element::Polygon(e) => e.category_id = category_id,
            Element::Stage(_) => {}
        }
    }

    /// Whether the paint-category tool may target this element.
    pub fn accepts_category(&self) -> bool {
        !matches!(self, Element::Stage(_))
    }

    pub fn is_bookable(&self) -> bool {
        match self {
            Element::Seat(e) => e.is_bookable,
            Element::Section(e) => e.is_bookable,
            Element::Polygon(e) => e.is_bookable,
            Element::Stage(_) => true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Element::Seat(e) => e.bounds(),
            Element::Section(e) => e.bounds(),
            Element::Polygon(e) => e.bounds(),
            Element::Stage(e) => e.bounds(),
        }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        match self {
            Element::Seat(e) => e.contains_point(p),
            Element::Section(e) => e.contains_point(p),
            Element::Polygon(e) => e.contains_point(p),
            Element::Stage(e) => e.contains_point(p),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Element::Seat(e) => e.translate(dx, dy),
            Element::Section(e) => e.translate(dx, dy),
            Element::Polygon(e) => e.translate(dx, dy),
            Element::Stage(e) => e.translate(dx, dy),
        }
    }
}
