//! Price/seating categories.
//!
//! A category is a named, colored grouping referenced by elements
//! through their `category_id`. The store keeps insertion order (the
//! order operators created them in, which is how property panels list
//! them) and tracks the active category used by placement and the
//! paint tool.
//!
//! Rename and delete must also rewrite element references, so those
//! cascades live on [`crate::VenueCanvas`], which owns both stores.

use seatkit_core::error::ValidationError;

/// A named, colored seat-class grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Uppercase letters/digits/underscores, unique within the store.
    pub id: String,
    pub name: String,
    /// RGB hex string, e.g. `#3498db`.
    pub color: String,
}

/// Returns true when `id` matches `^[A-Z_][A-Z0-9_]*$`.
pub fn is_valid_category_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Insertion-ordered collection of categories plus the active pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStore {
    categories: Vec<Category>,
    active_id: Option<String>,
}

impl CategoryStore {
    /// Creates an empty store with no active category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and inserts a new category, marking it active.
    ///
    /// Fails with [`ValidationError::InvalidCategoryId`] when the id
    /// does not match the required pattern and
    /// [`ValidationError::DuplicateCategoryId`] when it is taken.
    pub fn create(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let id = id.into();
        if !is_valid_category_id(&id) {
            return Err(ValidationError::InvalidCategoryId { id });
        }
        if self.contains(&id) {
            return Err(ValidationError::DuplicateCategoryId { id });
        }
        self.categories.push(Category {
            id: id.clone(),
            name: name.into(),
            color: color.into(),
        });
        self.active_id = Some(id);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The active category id, if one is selected and still present.
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active(&self) -> Option<&Category> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// Points the active category at `id`. Selecting an unknown id
    /// fails; selecting `None` clears the pointer.
    pub fn select(&mut self, id: Option<&str>) -> Result<(), ValidationError> {
        match id {
            Some(id) if !self.contains(id) => Err(ValidationError::UnknownCategory {
                id: id.to_string(),
            }),
            Some(id) => {
                self.active_id = Some(id.to_string());
                Ok(())
            }
            None => {
                self.active_id = None;
                Ok(())
            }
        }
    }

    /// Removes a category record. Internal: callers go through the
    /// canvas cascade so element references are cleared in the same
    /// operation.
    pub(crate) fn remove_record(&mut self, id: &str) -> Option<Category> {
        let idx = self.categories.iter().position(|c| c.id == id)?;
        let removed = self.categories.remove(idx);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        Some(removed)
    }

    /// Rewrites a category id in place, keeping insertion order.
    /// Internal: callers go through the canvas rename cascade.
    pub(crate) fn rename_record(&mut self, id: &str, new_id: &str) {
        if let Some(cat) = self.get_mut(id) {
            cat.id = new_id.to_string();
        }
        if self.active_id.as_deref() == Some(id) {
            self.active_id = Some(new_id.to_string());
        }
    }
}
