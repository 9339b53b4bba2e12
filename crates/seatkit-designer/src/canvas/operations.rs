//! Cross-store operations and validated element mutation for VenueCanvas.

use super::VenueCanvas;
use crate::elements::{new_element_id, Element};
use seatkit_core::constants::{CAPACITY_MAX, CAPACITY_MIN, DUPLICATE_OFFSET, MIN_SEAT_SIZE};
use seatkit_core::error::ValidationError;

impl VenueCanvas {
    // --- category transactions -------------------------------------------

    /// Creates a category and marks it active. See
    /// [`crate::CategoryStore::create`] for the failure modes.
    pub fn create_category(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.categories_mut().create(id, name, color)
    }

    /// Updates a category's name/color, optionally renaming its id.
    ///
    /// A rename atomically rewrites the id in the category store and on
    /// every element referencing it; no element is left pointing at the
    /// old id. The new id is validated like a created one.
    pub fn update_category(
        &mut self,
        id: &str,
        name: Option<&str>,
        color: Option<&str>,
        new_id: Option<&str>,
    ) -> Result<(), ValidationError> {
        if !self.categories().contains(id) {
            return Err(ValidationError::UnknownCategory { id: id.to_string() });
        }

        if let Some(new_id) = new_id.filter(|n| *n != id) {
            if !crate::categories::is_valid_category_id(new_id) {
                return Err(ValidationError::InvalidCategoryId {
                    id: new_id.to_string(),
                });
            }
            if self.categories().contains(new_id) {
                return Err(ValidationError::DuplicateCategoryId {
                    id: new_id.to_string(),
                });
            }
            self.categories_mut().rename_record(id, new_id);
            let new_id = new_id.to_string();
            for element in self.elements_mut() {
                if element.category_id() == Some(id) {
                    element.set_category_id(Some(new_id.clone()));
                }
            }
            tracing::debug!(from = id, to = %new_id, "renamed category");
            let renamed = new_id;
            self.apply_category_fields(&renamed, name, color);
            return Ok(());
        }

        self.apply_category_fields(id, name, color);
        Ok(())
    }

    fn apply_category_fields(&mut self, id: &str, name: Option<&str>, color: Option<&str>) {
        if let Some(cat) = self.categories_mut().get_mut(id) {
            if let Some(name) = name {
                cat.name = name.to_string();
            }
            if let Some(color) = color {
                cat.color = color.to_string();
            }
        }
    }

    /// Deletes a category, clearing the reference on every element that
    /// used it. Elements themselves are never deleted by this cascade.
    pub fn delete_category(&mut self, id: &str) -> Result<(), ValidationError> {
        if self.categories_mut().remove_record(id).is_none() {
            return Err(ValidationError::UnknownCategory { id: id.to_string() });
        }
        let mut cleared = 0usize;
        for element in self.elements_mut() {
            if element.category_id() == Some(id) {
                element.set_category_id(None);
                cleared += 1;
            }
        }
        tracing::debug!(category = id, cleared, "deleted category");
        Ok(())
    }

    /// Points the active category at `id` (or clears it). Touches only
    /// the category store.
    pub fn select_category(&mut self, id: Option<&str>) -> Result<(), ValidationError> {
        self.categories_mut().select(id)
    }

    /// Assigns a category to each listed element. Stages and unknown
    /// ids are skipped; a dangling category id is rejected up front.
    pub fn bulk_assign_category(
        &mut self,
        element_ids: &[String],
        category_id: &str,
    ) -> Result<(), ValidationError> {
        if !self.categories().contains(category_id) {
            return Err(ValidationError::UnknownCategory {
                id: category_id.to_string(),
            });
        }
        for id in element_ids {
            if let Some(element) = self.get_mut(id) {
                if element.accepts_category() {
                    element.set_category_id(Some(category_id.to_string()));
                }
            }
        }
        Ok(())
    }

    // --- element operations ----------------------------------------------

    /// Clones an element under a fresh id, offset by +30 world units on
    /// both axes (every vertex, for polygons). Returns the new id.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let mut copy = self.get(id)?.clone();
        copy.set_id(new_element_id());
        copy.translate(DUPLICATE_OFFSET, DUPLICATE_OFFSET);
        Some(self.add_element(copy))
    }

    /// Sets the capacity of a section or polygon area, clamped to
    /// [[`CAPACITY_MIN`], [`CAPACITY_MAX`]]. Other kinds are untouched.
    pub fn set_capacity(&mut self, id: &str, capacity: u32) {
        let capacity = capacity.clamp(CAPACITY_MIN, CAPACITY_MAX);
        match self.get_mut(id) {
            Some(Element::Section(s)) => s.capacity = capacity,
            Some(Element::Polygon(p)) => p.capacity = capacity,
            _ => {}
        }
    }

    /// Sets the bookable flag of a seat, section, or polygon area.
    pub fn set_bookable(&mut self, id: &str, is_bookable: bool) {
        match self.get_mut(id) {
            Some(Element::Seat(s)) => s.is_bookable = is_bookable,
            Some(Element::Section(s)) => s.is_bookable = is_bookable,
            Some(Element::Polygon(p)) => p.is_bookable = is_bookable,
            _ => {}
        }
    }

    /// Sets a seat's edge length, floored at [`MIN_SEAT_SIZE`].
    pub fn set_seat_size(&mut self, id: &str, size: f64) {
        if let Some(Element::Seat(seat)) = self.get_mut(id) {
            seat.size = size.max(MIN_SEAT_SIZE);
        }
    }

    /// Sets the display label (seat number, section/area/stage label).
    pub fn set_label(&mut self, id: &str, label: &str) {
        match self.get_mut(id) {
            Some(Element::Seat(s)) => s.number = label.to_string(),
            Some(Element::Section(s)) => s.label = label.to_string(),
            Some(Element::Polygon(p)) => p.label = label.to_string(),
            Some(Element::Stage(s)) => s.label = label.to_string(),
            None => {}
        }
    }

    /// Sets a seat's grouping labels. `None` leaves a field unchanged;
    /// `Some("")` clears it.
    pub fn set_seat_grouping(&mut self, id: &str, section: Option<&str>, row: Option<&str>) {
        if let Some(Element::Seat(seat)) = self.get_mut(id) {
            if let Some(section) = section {
                seat.section = (!section.is_empty()).then(|| section.to_string());
            }
            if let Some(row) = row {
                seat.row = (!row.is_empty()).then(|| row.to_string());
            }
        }
    }

    /// Sets the stage fill color.
    pub fn set_stage_color(&mut self, id: &str, color: &str) {
        if let Some(Element::Stage(stage)) = self.get_mut(id) {
            stage.color = color.to_string();
        }
    }

    // --- internal accessors for sibling impls ----------------------------

    pub(crate) fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    pub(crate) fn categories_mut(&mut self) -> &mut crate::categories::CategoryStore {
        &mut self.categories
    }
}
