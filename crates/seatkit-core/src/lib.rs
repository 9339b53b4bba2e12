//! # SeatKit Core
//!
//! Core types and utilities shared across the SeatKit workspace:
//! coordinate-space geometry and hit-testing, RGB color parsing,
//! the error taxonomy, and the numeric policy constants of the
//! layout editor.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;

pub use color::{parse_hex_color, Rgb};
pub use error::{Error, LayoutError, Result, ValidationError};
pub use geometry::{
    point_in_polygon, point_in_rect, polygon_centroid, screen_to_world, world_to_screen, Bounds,
    Point,
};
