//! Serialization and migration for persisted venue layouts.
//!
//! The layout travels as the venue record's `canvas_data`: a JSON
//! object `{ categories, elements, showGrid }`. Loading is permissive:
//! records written by earlier releases lack category references,
//! capacities, and bookable flags, and may still carry per-element
//! `price`/`status` fields. [`VenueLayout::normalize`] reproduces the
//! migration rules: defaults are filled in, legacy seats/sections are
//! assigned the `GENERAL`/`SECTION` categories, and unknown fields
//! (including `price`/`status`) are dropped. Normalization is
//! idempotent, so re-migrating an already-migrated record is a no-op.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::canvas::VenueCanvas;
use crate::editor::Editor;
use crate::elements::{new_element_id, Element, PolygonArea, Seat, Section, Stage};
use seatkit_core::constants::{
    CAPACITY_MAX, CAPACITY_MIN, DEFAULT_ELEMENT_COLOR, DEFAULT_SEAT_SIZE, DEFAULT_SECTION_HEIGHT,
    DEFAULT_SECTION_WIDTH, DEFAULT_STAGE_COLOR, DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH,
    LEGACY_SEAT_CATEGORY, LEGACY_SECTION_CATEGORY,
};
use seatkit_core::error::{LayoutError, ValidationError};
use seatkit_core::geometry::Point;

/// A category as persisted, keyed by id in the layout's map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub color: String,
}

/// An element as persisted. Optional fields tolerate legacy records;
/// unknown fields (legacy `price`/`status` among them) are dropped by
/// deserialization and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementRecord {
    Seat {
        #[serde(default)]
        id: Option<String>,
        #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
        category_id: Option<String>,
        x: f64,
        y: f64,
        #[serde(default)]
        size: Option<f64>,
        #[serde(default)]
        number: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        section: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        row: Option<String>,
        #[serde(default)]
        is_bookable: Option<bool>,
    },
    Section {
        #[serde(default)]
        id: Option<String>,
        #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
        category_id: Option<String>,
        x: f64,
        y: f64,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        capacity: Option<u32>,
        #[serde(default)]
        is_bookable: Option<bool>,
    },
    Polygon {
        #[serde(default)]
        id: Option<String>,
        #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
        category_id: Option<String>,
        #[serde(default)]
        points: Vec<Point>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        capacity: Option<u32>,
        #[serde(default)]
        is_bookable: Option<bool>,
    },
    Stage {
        #[serde(default)]
        id: Option<String>,
        x: f64,
        y: f64,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

fn default_true() -> bool {
    true
}

/// The persisted layout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueLayout {
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryRecord>,
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
    #[serde(rename = "showGrid", default = "default_true")]
    pub show_grid: bool,
}

/// The host-side venue row the editor is opened with. `geometry_data`
/// is the current column; `layout_data` is its legacy predecessor.
/// Either may hold the layout as an object or as string-encoded JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub geometry_data: Option<serde_json::Value>,
    #[serde(default)]
    pub layout_data: Option<serde_json::Value>,
}

/// What the editor hands the host's `on_save` collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavePayload {
    pub venue_name: String,
    pub layout: VenueLayout,
}

impl VenueLayout {
    /// The layout a fresh venue starts from: no elements, grid on, the
    /// default `GENERAL`/`SECTION` categories.
    pub fn default_layout() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            LEGACY_SEAT_CATEGORY.to_string(),
            CategoryRecord {
                name: "General".to_string(),
                color: DEFAULT_ELEMENT_COLOR.to_string(),
            },
        );
        categories.insert(
            LEGACY_SECTION_CATEGORY.to_string(),
            CategoryRecord {
                name: "Section".to_string(),
                color: "#2ecc71".to_string(),
            },
        );
        Self {
            categories,
            elements: Vec::new(),
            show_grid: true,
        }
    }

    /// Decodes a layout from a JSON value that is either the record
    /// object itself or a string containing encoded JSON (the legacy
    /// column stored strings).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, LayoutError> {
        let layout: VenueLayout = match value {
            serde_json::Value::String(encoded) => serde_json::from_str(encoded)?,
            serde_json::Value::Object(_) => serde_json::from_value(value.clone())?,
            other => {
                return Err(LayoutError::UnexpectedShape {
                    reason: format!("expected object or string, got {other}"),
                })
            }
        };
        Ok(layout.normalize())
    }

    /// Opens the layout stored on a venue row, preferring
    /// `geometry_data` over the legacy `layout_data`. A missing or
    /// malformed record degrades to [`VenueLayout::default_layout`]
    /// with a warning, never an error.
    pub fn from_venue_record(venue: &VenueRecord) -> Self {
        let stored = venue.geometry_data.as_ref().or(venue.layout_data.as_ref());
        match stored {
            Some(value) => Self::from_value(value).unwrap_or_else(|err| {
                tracing::warn!(venue = %venue.name, %err, "unreadable layout, starting empty");
                Self::default_layout()
            }),
            None => Self::default_layout(),
        }
    }

    /// Applies the migration rules. Idempotent: normalizing an already
    /// normalized layout yields an equal record (new ids are only
    /// assigned where a record had none).
    pub fn normalize(mut self) -> Self {
        let mut seen_ids = HashSet::new();
        let mut elements = Vec::with_capacity(self.elements.len());

        for record in self.elements {
            let Some(mut record) = normalize_element(record) else {
                continue;
            };
            // Keep ids unique even over hand-edited data.
            let id = record.id().unwrap_or_default().to_string();
            if !seen_ids.insert(id.clone()) {
                let fresh = new_element_id();
                tracing::warn!(duplicate = %id, reassigned = %fresh, "duplicate element id");
                seen_ids.insert(fresh.clone());
                record.set_id(fresh);
            }
            elements.push(record);
        }
        self.elements = elements;

        // Migration may have introduced GENERAL/SECTION references; any
        // other reference that does not resolve is cleared so the
        // loaded canvas never holds a dangling category id.
        for record in &self.elements {
            if let Some(cat) = record.category_id() {
                if !self.categories.contains_key(cat) {
                    match cat {
                        LEGACY_SEAT_CATEGORY | LEGACY_SECTION_CATEGORY => {
                            let defaults = Self::default_layout();
                            let cat_record = defaults.categories[cat].clone();
                            self.categories.insert(cat.to_string(), cat_record);
                        }
                        _ => {}
                    }
                }
            }
        }
        let known: HashSet<String> = self.categories.keys().cloned().collect();
        for record in &mut self.elements {
            if let Some(cat) = record.category_id() {
                if !known.contains(cat) {
                    tracing::warn!(category = cat, "cleared unresolvable category reference");
                    record.clear_category();
                }
            }
        }

        self
    }

    /// Builds the in-memory canvas for this (normalized) layout.
    pub fn to_canvas(&self) -> VenueCanvas {
        let mut canvas = VenueCanvas::new();
        for (id, record) in &self.categories {
            if let Err(err) =
                canvas.create_category(id.clone(), record.name.clone(), record.color.clone())
            {
                tracing::warn!(%err, "skipped stored category");
            }
        }
        let _ = canvas.select_category(None);
        for record in &self.elements {
            if let Some(element) = record.to_element() {
                canvas.add_element(element);
            }
        }
        canvas
    }

    /// Captures a canvas back into the persisted record shape. Every
    /// field is written explicitly, so saved records need no migration.
    pub fn from_canvas(canvas: &VenueCanvas, show_grid: bool) -> Self {
        let categories = canvas
            .categories()
            .iter()
            .map(|c| {
                (
                    c.id.clone(),
                    CategoryRecord {
                        name: c.name.clone(),
                        color: c.color.clone(),
                    },
                )
            })
            .collect();
        let elements = canvas
            .elements()
            .iter()
            .map(ElementRecord::from_element)
            .collect();
        Self {
            categories,
            elements,
            show_grid,
        }
    }

    /// Writes the layout as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize layout")?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        Ok(())
    }

    /// Reads and normalizes a layout file.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        let layout: VenueLayout =
            serde_json::from_str(&content).context("Failed to parse layout file")?;
        Ok(layout.normalize())
    }
}

fn normalize_element(record: ElementRecord) -> Option<ElementRecord> {
    match record {
        ElementRecord::Seat {
            id,
            category_id,
            x,
            y,
            size,
            number,
            section,
            row,
            is_bookable,
        } => Some(ElementRecord::Seat {
            id: Some(id.unwrap_or_else(new_element_id)),
            category_id: category_id.or_else(|| Some(LEGACY_SEAT_CATEGORY.to_string())),
            x,
            y,
            size: Some(size.unwrap_or(DEFAULT_SEAT_SIZE)),
            number: Some(number.unwrap_or_else(|| "1".to_string())),
            section,
            row,
            is_bookable: Some(is_bookable.unwrap_or(true)),
        }),
        ElementRecord::Section {
            id,
            category_id,
            x,
            y,
            width,
            height,
            label,
            capacity,
            is_bookable,
        } => Some(ElementRecord::Section {
            id: Some(id.unwrap_or_else(new_element_id)),
            category_id: category_id.or_else(|| Some(LEGACY_SECTION_CATEGORY.to_string())),
            x,
            y,
            width: Some(width.unwrap_or(DEFAULT_SECTION_WIDTH)),
            height: Some(height.unwrap_or(DEFAULT_SECTION_HEIGHT)),
            label: Some(label.unwrap_or_else(|| "Section".to_string())),
            capacity: Some(capacity.unwrap_or(1).clamp(CAPACITY_MIN, CAPACITY_MAX)),
            is_bookable: Some(is_bookable.unwrap_or(true)),
        }),
        ElementRecord::Polygon {
            id,
            category_id,
            points,
            label,
            capacity,
            is_bookable,
        } => {
            if points.len() < 3 {
                tracing::warn!(
                    vertices = points.len(),
                    "dropped stored polygon with fewer than 3 points"
                );
                return None;
            }
            Some(ElementRecord::Polygon {
                id: Some(id.unwrap_or_else(new_element_id)),
                category_id,
                points,
                label: Some(label.unwrap_or_else(|| "Area".to_string())),
                capacity: Some(capacity.unwrap_or(1).clamp(CAPACITY_MIN, CAPACITY_MAX)),
                is_bookable: Some(is_bookable.unwrap_or(true)),
            })
        }
        ElementRecord::Stage {
            id,
            x,
            y,
            width,
            height,
            color,
            label,
        } => Some(ElementRecord::Stage {
            id: Some(id.unwrap_or_else(new_element_id)),
            x,
            y,
            width: Some(width.unwrap_or(DEFAULT_STAGE_WIDTH)),
            height: Some(height.unwrap_or(DEFAULT_STAGE_HEIGHT)),
            color: Some(color.unwrap_or_else(|| DEFAULT_STAGE_COLOR.to_string())),
            label: Some(label.unwrap_or_else(|| "Stage".to_string())),
        }),
    }
}

impl ElementRecord {
    pub fn id(&self) -> Option<&str> {
        match self {
            ElementRecord::Seat { id, .. }
            | ElementRecord::Section { id, .. }
            | ElementRecord::Polygon { id, .. }
            | ElementRecord::Stage { id, .. } => id.as_deref(),
        }
    }

    fn set_id(&mut self, new_id: String) {
        match self {
            ElementRecord::Seat { id, .. }
            | ElementRecord::Section { id, .. }
            | ElementRecord::Polygon { id, .. }
            | ElementRecord::Stage { id, .. } => *id = Some(new_id),
        }
    }

    pub fn category_id(&self) -> Option<&str> {
        match self {
            ElementRecord::Seat { category_id, .. }
            | ElementRecord::Section { category_id, .. }
            | ElementRecord::Polygon { category_id, .. } => category_id.as_deref(),
            ElementRecord::Stage { .. } => None,
        }
    }

    fn clear_category(&mut self) {
        match self {
            ElementRecord::Seat { category_id, .. }
            | ElementRecord::Section { category_id, .. }
            | ElementRecord::Polygon { category_id, .. } => *category_id = None,
            ElementRecord::Stage { .. } => {}
        }
    }

    /// Builds the in-memory element for a normalized record.
    pub fn to_element(&self) -> Option<Element> {
        match self.clone() {
            ElementRecord::Seat {
                id,
                category_id,
                x,
                y,
                size,
                number,
                section,
                row,
                is_bookable,
            } => Some(Element::Seat(Seat {
                id: id.unwrap_or_else(new_element_id),
                category_id,
                x,
                y,
                size: size.unwrap_or(DEFAULT_SEAT_SIZE),
                number: number.unwrap_or_else(|| "1".to_string()),
                section,
                row,
                is_bookable: is_bookable.unwrap_or(true),
            })),
            ElementRecord::Section {
                id,
                category_id,
                x,
                y,
                width,
                height,
                label,
                capacity,
                is_bookable,
            } => Some(Element::Section(Section {
                id: id.unwrap_or_else(new_element_id),
                category_id,
                x,
                y,
                width: width.unwrap_or(DEFAULT_SECTION_WIDTH),
                height: height.unwrap_or(DEFAULT_SECTION_HEIGHT),
                label: label.unwrap_or_else(|| "Section".to_string()),
                capacity: capacity.unwrap_or(1),
                is_bookable: is_bookable.unwrap_or(true),
            })),
            ElementRecord::Polygon {
                id,
                category_id,
                points,
                label,
                capacity,
                is_bookable,
            } => {
                if points.len() < 3 {
                    return None;
                }
                Some(Element::Polygon(PolygonArea {
                    id: id.unwrap_or_else(new_element_id),
                    category_id,
                    points,
                    label: label.unwrap_or_else(|| "Area".to_string()),
                    capacity: capacity.unwrap_or(1),
                    is_bookable: is_bookable.unwrap_or(true),
                }))
            }
            ElementRecord::Stage {
                id,
                x,
                y,
                width,
                height,
                color,
                label,
            } => Some(Element::Stage(Stage {
                id: id.unwrap_or_else(new_element_id),
                x,
                y,
                width: width.unwrap_or(DEFAULT_STAGE_WIDTH),
                height: height.unwrap_or(DEFAULT_STAGE_HEIGHT),
                color: color.unwrap_or_else(|| DEFAULT_STAGE_COLOR.to_string()),
                label: label.unwrap_or_else(|| "Stage".to_string()),
            })),
        }
    }

    /// Captures an in-memory element; every field is written.
    pub fn from_element(element: &Element) -> Self {
        match element {
            Element::Seat(e) => ElementRecord::Seat {
                id: Some(e.id.clone()),
                category_id: e.category_id.clone(),
                x: e.x,
                y: e.y,
                size: Some(e.size),
                number: Some(e.number.clone()),
                section: e.section.clone(),
                row: e.row.clone(),
                is_bookable: Some(e.is_bookable),
            },
            Element::Section(e) => ElementRecord::Section {
                id: Some(e.id.clone()),
                category_id: e.category_id.clone(),
                x: e.x,
                y: e.y,
                width: Some(e.width),
                height: Some(e.height),
                label: Some(e.label.clone()),
                capacity: Some(e.capacity),
                is_bookable: Some(e.is_bookable),
            },
            Element::Polygon(e) => ElementRecord::Polygon {
                id: Some(e.id.clone()),
                category_id: e.category_id.clone(),
                points: e.points.clone(),
                label: Some(e.label.clone()),
                capacity: Some(e.capacity),
                is_bookable: Some(e.is_bookable),
            },
            Element::Stage(e) => ElementRecord::Stage {
                id: Some(e.id.clone()),
                x: e.x,
                y: e.y,
                width: Some(e.width),
                height: Some(e.height),
                color: Some(e.color.clone()),
                label: Some(e.label.clone()),
            },
        }
    }
}

impl Editor {
    /// Opens an editor over a host venue row, running migration.
    pub fn from_venue_record(venue: &VenueRecord) -> Self {
        let layout = VenueLayout::from_venue_record(venue);
        let mut editor = Editor::with_canvas(venue.name.clone(), layout.to_canvas());
        editor.restore_show_grid(layout.show_grid);
        editor
    }

    /// Validates and captures the current state for the host's
    /// `on_save` collaborator, clearing the dirty flag on success.
    pub fn save_payload(&mut self) -> Result<SavePayload, ValidationError> {
        self.validate_save()?;
        let payload = SavePayload {
            venue_name: self.venue_name().to_string(),
            layout: VenueLayout::from_canvas(self.canvas(), self.show_grid()),
        };
        self.mark_saved();
        Ok(payload)
    }
}
