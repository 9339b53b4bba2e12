//! # SeatKit
//!
//! A venue seating layout toolkit for event ticketing: design seat
//! maps with seats, sections, polygon areas, and a stage, group them
//! into price/seating categories, and persist or rasterize the result.
//!
//! ## Architecture
//!
//! SeatKit is organized as a workspace with multiple crates:
//!
//! 1. **seatkit-core** - Geometry, hit-testing, colors, errors, constants
//! 2. **seatkit-designer** - The layout designer: element and category
//!    stores, the interaction state machine, rendering, persistence
//! 3. **seatkit** - This binary, the host shell around the designer
//!
//! ## Features
//!
//! - **Headless editor core**: every pointer/keyboard interaction is a
//!   plain method call over inspectable state
//! - **Category model**: named, colored seat classes with atomic
//!   rename/delete cascades over the element collection
//! - **Legacy migration**: older layout records are normalized on load
//! - **Raster output**: layouts render to PNG through tiny-skia

pub use seatkit_designer as designer;

pub use seatkit_core::{Error, LayoutError, Result, ValidationError};
pub use seatkit_designer::{
    render_editor, Editor, EditorSignal, Element, InteractionState, Tool, VenueCanvas,
    VenueLayout, VenueRecord, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
