//! Stroke path model and codec for the glyphpad font builder.
//!
//! This crate provides:
//! - The in-memory glyph path model: strokes of straight-line segments in a
//!   fixed 1000x1000 logical canvas space
//! - A lossless text codec between a glyph path and its compact
//!   `"M x y L x y ..."` serialized form
//! - `Drawing`, the mutable pen-down/pen-up editing state a drawing surface
//!   feeds with pointer samples
//!
//! Everything here is pure and synchronous: no I/O, no background work.

pub mod codec;
pub mod drawing;
mod error;
mod model;

// Re-export main types for convenience
pub use drawing::{Drawing, ERASE_RADIUS};
pub use error::MalformedPath;
pub use model::{CANVAS_SIZE, GlyphPath, PathCommand, Stroke};

// The canvas and design spaces are both defined over [0, 1000] f64
// coordinates, so the geometry types are kurbo's.
pub use kurbo::Point;
