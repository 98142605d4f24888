//! Font assembly for the glyphpad font builder.
//!
//! This crate provides:
//! - The fixed supported character set and its stable order
//! - `GlyphStore`, the owned character-to-path keyed store
//! - Assembly of stored paths into a `FontDocument` with per-glyph metrics
//! - Compilation of a document into a loadable TTF via write-fonts
//!
//! The drawing side lives in `glyphpad-path`; this crate consumes finished
//! glyph paths and never touches pointer input.

pub mod assembler;
pub mod charset;
pub mod compile;
pub mod document;
mod error;
pub mod store;

// Re-export main types for convenience
pub use assembler::{BuildReport, build_font, build_font_from_encoded, glyph_record};
pub use compile::{compile, write_font_file};
pub use document::{
    ADVANCE_WIDTH, ASCENDER, DESCENDER, FontDocument, FontSettings, GlyphRecord, UNITS_PER_EM,
};
pub use error::FontError;
pub use store::GlyphStore;

// Path types consumers need when feeding the store
pub use glyphpad_path::{GlyphPath, MalformedPath};
