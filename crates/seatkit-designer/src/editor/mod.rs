//! Editor state for the layout designer.
//!
//! [`Editor`] is the headless state container behind the canvas UI: it
//! owns the venue canvas, the viewport, the active tool, the single
//! selection, and the interaction state machine. Pointer and keyboard
//! handlers live in sibling modules:
//! - `input`: pointer-down/move/up, double-click, wheel
//! - `keyboard`: tool shortcuts, delete, duplicate, escape

mod input;
mod keyboard;

pub use keyboard::{KeyCode, KeyPress};

use crate::canvas::VenueCanvas;
use crate::elements::Element;
use crate::handles::ResizeHandle;
use crate::viewport::Viewport;
use seatkit_core::error::ValidationError;
use seatkit_core::geometry::Point;

/// The interaction modes an operator can put the canvas in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Pan,
    Seat,
    Section,
    Polygon,
    Stage,
    PaintCategory,
}

/// The pointer-drag state machine. Exactly one variant is active at a
/// time; every dragging variant carries the snapshot taken at
/// pointer-down so moves are computed against a fixed origin.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Dragging the viewport with the pan tool.
    Panning {
        start_pan: Point,
        start_pointer: Point,
    },
    /// Dragging a selected element.
    MovingElement {
        id: String,
        start_world: Point,
        snapshot: Element,
    },
    /// Dragging a resize handle of the selected element.
    ResizingElement {
        id: String,
        handle: ResizeHandle,
        start_screen: Point,
        snapshot: Element,
    },
    /// Accumulating vertices for a new polygon area. Survives
    /// pointer-up; ends when the ring is closed or construction is
    /// cancelled.
    ConstructingPolygon { points: Vec<Point> },
}

/// A request the editor bubbles up to its host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSignal {
    /// The operator asked to close the editor (Escape). The host owns
    /// the cancel flow; discarding uncommitted state is dropping the
    /// editor.
    CancelRequested,
}

/// Headless designer state: canvas + viewport + tool + selection +
/// interaction state.
#[derive(Debug, Clone)]
pub struct Editor {
    canvas: VenueCanvas,
    viewport: Viewport,
    tool: Tool,
    selected_id: Option<String>,
    interaction: InteractionState,
    show_grid: bool,
    venue_name: String,
    dirty: bool,
}

impl Editor {
    /// Creates an editor over an empty canvas seeded with the default
    /// categories.
    pub fn new(venue_name: impl Into<String>) -> Self {
        Self::with_canvas(venue_name, VenueCanvas::with_default_categories())
    }

    /// Creates an editor over an existing canvas (e.g. a loaded layout).
    pub fn with_canvas(venue_name: impl Into<String>, canvas: VenueCanvas) -> Self {
        Self {
            canvas,
            viewport: Viewport::new(),
            tool: Tool::Select,
            selected_id: None,
            interaction: InteractionState::Idle,
            show_grid: true,
            venue_name: venue_name.into(),
            dirty: false,
        }
    }

    pub fn canvas(&self) -> &VenueCanvas {
        &self.canvas
    }

    /// Mutable canvas access for property panels. Any mutation through
    /// here should be followed by [`Editor::mark_dirty`].
    pub fn canvas_mut(&mut self) -> &mut VenueCanvas {
        &mut self.canvas
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools. An unfinished polygon is abandoned; the drag
    /// state machine resets.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            tracing::debug!(?tool, "tool changed");
        }
        self.tool = tool;
        self.interaction = InteractionState::Idle;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_id.as_deref().and_then(|id| self.canvas.get(id))
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub(crate) fn set_interaction(&mut self, state: InteractionState) {
        self.interaction = state;
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
        self.dirty = true;
    }

    /// Restores the persisted grid flag during load without marking
    /// the editor dirty.
    pub(crate) fn restore_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn venue_name(&self) -> &str {
        &self.venue_name
    }

    pub fn set_venue_name(&mut self, name: impl Into<String>) {
        self.venue_name = name.into();
        self.dirty = true;
    }

    /// Whether there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Removes the selected element, if any. Returns true when
    /// something was deleted.
    pub fn delete_selection(&mut self) -> bool {
        let Some(id) = self.selected_id.take() else {
            return false;
        };
        let removed = self.canvas.remove(&id).is_some();
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// Duplicates the selected element and selects the copy.
    pub fn duplicate_selection(&mut self) -> Option<String> {
        let id = self.selected_id.clone()?;
        let new_id = self.canvas.duplicate(&id)?;
        self.selected_id = Some(new_id.clone());
        self.dirty = true;
        Some(new_id)
    }

    /// Removes every element. Destructive: the host confirms with the
    /// operator before calling.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
        self.selected_id = None;
        self.interaction = InteractionState::Idle;
        self.dirty = true;
    }

    /// Validates the current state for saving. The canvas must hold at
    /// least one element and the venue name must not be blank; both
    /// failures surface as inline messages, never as panics.
    pub fn validate_save(&self) -> Result<(), ValidationError> {
        if self.canvas.is_empty() {
            return Err(ValidationError::EmptyCanvas);
        }
        if self.venue_name.trim().is_empty() {
            return Err(ValidationError::BlankVenueName);
        }
        Ok(())
    }
}
