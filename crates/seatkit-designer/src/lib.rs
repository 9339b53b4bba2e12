//! # SeatKit Designer
//!
//! The venue seating layout designer: an interactive 2D canvas editor
//! core that places seats, sections, polygon areas, and a stage,
//! assigns them to price/seating categories, and persists the geometry
//! as structured data for booking and ticket rendering.
//!
//! ## Core Components
//!
//! - **Elements**: seats, sections, polygon areas, and the stage
//! - **Categories**: named, colored seat-class groupings with
//!   rename/delete cascades over the element collection
//! - **Canvas**: the element + category stores and every cross-store
//!   invariant (unique ids, no dangling category references)
//! - **Viewport**: pan/zoom mapping between world and screen space
//! - **Editor**: the pointer/keyboard interaction state machine
//! - **Renderer**: rasterizes the editor state to an image
//! - **Serialization**: the persisted layout record, including
//!   migration of legacy records
//!
//! ## Architecture
//!
//! ```text
//! Editor (interaction state machine)
//!   ├── VenueCanvas (elements + categories)
//!   ├── Viewport (pan/zoom)
//!   └── selection / drag state
//!
//! Renderer (editor state -> RgbImage)
//!
//! VenueLayout (persisted record + migration)
//! ```
//!
//! The editor is headless: pointer and key events come in as plain
//! calls, all state is inspectable, and no rendering surface is
//! required. The renderer is a pure function over editor state.
//!
//! ## Usage
//!
//! ```rust
//! use seatkit_designer::{Editor, Tool};
//! use seatkit_core::Point;
//!
//! let mut editor = Editor::new("Main Hall");
//! editor.set_tool(Tool::Seat);
//! editor.pointer_down(Point::new(100.0, 100.0));
//! assert_eq!(editor.canvas().elements().len(), 1);
//! ```

pub mod canvas;
pub mod categories;
pub mod editor;
pub mod elements;
pub mod handles;
pub mod renderer;
pub mod serialization;
pub mod viewport;

pub use canvas::VenueCanvas;
pub use categories::{Category, CategoryStore};
pub use editor::{Editor, EditorSignal, InteractionState, KeyCode, KeyPress, Tool};
pub use elements::{Element, PolygonArea, Seat, Section, Stage};
pub use handles::{HandleDirection, ResizeHandle};
pub use renderer::{render_editor, render_layout};
pub use serialization::{SavePayload, VenueLayout, VenueRecord};
pub use viewport::Viewport;
