//! The venue canvas: element and category stores under one owner.

mod operations;

use crate::categories::CategoryStore;
use crate::elements::Element;
use seatkit_core::constants::{DEFAULT_ELEMENT_COLOR, LEGACY_SEAT_CATEGORY, LEGACY_SECTION_CATEGORY};
use seatkit_core::geometry::{Bounds, Point};

/// Canvas state owning the element collection and the category store.
///
/// Elements are kept in draw order (first element drawn first, so the
/// last match wins hit-testing). Every operation that touches both
/// stores (category rename and delete cascades, bulk assignment)
/// lives here as a single method, so there is never an observable
/// state where one store has been updated and the other has not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueCanvas {
    elements: Vec<Element>,
    categories: CategoryStore,
}

impl VenueCanvas {
    /// Creates an empty canvas with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty canvas seeded with the default `GENERAL` and
    /// `SECTION` categories, the state a fresh venue (or a venue whose
    /// stored layout failed to parse) starts from.
    pub fn with_default_categories() -> Self {
        let mut canvas = Self::new();
        canvas
            .categories
            .create(LEGACY_SEAT_CATEGORY, "General", DEFAULT_ELEMENT_COLOR)
            .expect("default category id is valid");
        canvas
            .categories
            .create(LEGACY_SECTION_CATEGORY, "Section", "#2ecc71")
            .expect("default category id is valid");
        // New placements default to the general seat class.
        let _ = canvas.categories.select(Some(LEGACY_SEAT_CATEGORY));
        canvas
    }

    /// The elements in draw order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends an element and returns its id.
    ///
    /// Ids must be unique and category references must resolve; both
    /// hold for elements built through this crate's constructors, and
    /// loaded records are normalized before insertion.
    pub fn add_element(&mut self, element: Element) -> String {
        debug_assert!(
            !self.elements.iter().any(|e| e.id() == element.id()),
            "duplicate element id {}",
            element.id()
        );
        debug_assert!(
            element
                .category_id()
                .map(|id| self.categories.contains(id))
                .unwrap_or(true),
            "dangling category reference {:?}",
            element.category_id()
        );
        let id = element.id().to_string();
        self.elements.push(element);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Removes an element by id, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let idx = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(idx))
    }

    /// Removes every element. Categories are kept; the host gates this
    /// behind a confirmation.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The topmost element containing the world point, if any. Later
    /// elements draw on top, so the collection is scanned in reverse.
    pub fn element_at(&self, world: &Point) -> Option<&Element> {
        self.elements.iter().rev().find(|e| e.contains_point(world))
    }

    /// World bounds covering every element, or `None` when empty.
    pub fn content_bounds(&self) -> Option<Bounds> {
        let mut iter = self.elements.iter();
        let first = iter.next()?.bounds();
        Some(iter.fold(first, |acc, e| acc.union(&e.bounds())))
    }

    /// Label for the next placed seat: seats count up from "1".
    pub fn next_seat_number(&self) -> String {
        let count = self
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Seat(_)))
            .count();
        (count + 1).to_string()
    }

    /// Label for the next placed section: "Section A", "Section B", …
    /// wrapping back to A after Z.
    pub fn next_section_label(&self) -> String {
        let count = self
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Section(_)))
            .count();
        let letter = (b'A' + (count % 26) as u8) as char;
        format!("Section {letter}")
    }

    /// Label for the next committed polygon area: "Area 1", "Area 2", …
    pub fn next_area_label(&self) -> String {
        let count = self
            .elements
            .iter()
            .filter(|e| matches!(e, Element::Polygon(_)))
            .count();
        format!("Area {}", count + 1)
    }
}
