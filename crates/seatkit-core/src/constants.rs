//! Numeric policy for the layout editor.
//!
//! Every clamp, default, and threshold the editor applies lives here so
//! the designer crate and its tests agree on a single source of truth.

/// Minimum viewport scale (10%).
pub const ZOOM_MIN: f64 = 0.1;

/// Maximum viewport scale (300%).
pub const ZOOM_MAX: f64 = 3.0;

/// Multiplicative zoom step for scroll-up / zoom-in.
pub const ZOOM_STEP_IN: f64 = 1.1;

/// Multiplicative zoom step for scroll-down / zoom-out.
pub const ZOOM_STEP_OUT: f64 = 0.9;

/// Grid spacing in world units; screen spacing is `GRID_SPACING * scale`.
pub const GRID_SPACING: f64 = 20.0;

/// Edge length of a newly placed seat, world units.
pub const DEFAULT_SEAT_SIZE: f64 = 20.0;

/// Smallest a seat can be resized to.
pub const MIN_SEAT_SIZE: f64 = 10.0;

/// Default width of a newly placed section.
pub const DEFAULT_SECTION_WIDTH: f64 = 100.0;

/// Default height of a newly placed section.
pub const DEFAULT_SECTION_HEIGHT: f64 = 80.0;

/// Default width of a newly placed stage.
pub const DEFAULT_STAGE_WIDTH: f64 = 200.0;

/// Default height of a newly placed stage.
pub const DEFAULT_STAGE_HEIGHT: f64 = 40.0;

/// Smallest width/height a section or stage can be resized to.
pub const MIN_RECT_SIZE: f64 = 20.0;

/// Valid capacity range for sections and polygon areas.
pub const CAPACITY_MIN: u32 = 1;
pub const CAPACITY_MAX: u32 = 1000;

/// Screen-pixel distance within which a click closes an in-progress
/// polygon against its first point (world distance is this / scale).
pub const POLYGON_CLOSE_DISTANCE: f64 = 20.0;

/// World-unit offset applied to duplicated elements on both axes.
pub const DUPLICATE_OFFSET: f64 = 30.0;

/// Drawn edge length of a resize handle, screen pixels.
pub const HANDLE_SIZE: f64 = 10.0;

/// Half-width of the square used when hit-testing a resize handle.
pub const HANDLE_HIT_RADIUS: f64 = 8.0;

/// Fraction of the view reserved as padding by fit-to-bounds.
pub const VIEW_PADDING: f64 = 0.05;

/// Fill color applied to elements with no resolvable category.
pub const DEFAULT_ELEMENT_COLOR: &str = "#3498db";

/// Default fill color for a newly placed stage.
pub const DEFAULT_STAGE_COLOR: &str = "#34495e";

/// Category id assigned to legacy seats that predate categories.
pub const LEGACY_SEAT_CATEGORY: &str = "GENERAL";

/// Category id assigned to legacy sections that predate categories.
pub const LEGACY_SECTION_CATEGORY: &str = "SECTION";
