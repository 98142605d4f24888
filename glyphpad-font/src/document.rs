//! Font document model and fixed metrics.
//!
//! Design units equal canvas units: both spaces run over `[0, 1000]`, so
//! stroke coordinates map straight into glyph outlines with no scaling.

use glyphpad_path::GlyphPath;
use serde::{Deserialize, Serialize};

/// Design units per em square.
pub const UNITS_PER_EM: u16 = 1000;

/// Typographic ascender in design units.
pub const ASCENDER: i16 = 800;

/// Typographic descender in design units (negative: below the baseline).
pub const DESCENDER: i16 = -200;

/// Horizontal advance of every glyph, in design units. All glyphs reserve
/// the same width in this version.
pub const ADVANCE_WIDTH: u16 = 1000;

/// Naming settings carried into the assembled font.
///
/// The defaults are the fixed names this version ships with; the fields are
/// serde-enabled so integrators can persist them alongside the rest of their
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSettings {
    /// Font family name (name table family record).
    #[serde(default = "default_family_name")]
    pub family_name: String,
    /// Style/subfamily name.
    #[serde(default = "default_style_name")]
    pub style_name: String,
}

fn default_family_name() -> String {
    "MyCustomFont".to_string()
}

fn default_style_name() -> String {
    "Regular".to_string()
}

impl Default for FontSettings {
    fn default() -> Self {
        FontSettings {
            family_name: default_family_name(),
            style_name: default_style_name(),
        }
    }
}

/// One assembled glyph: a drawn character, its outline in design units, and
/// its fixed advance.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRecord {
    /// The character this glyph renders.
    pub character: char,
    /// Horizontal advance in design units; always [`ADVANCE_WIDTH`].
    pub advance_width: u16,
    /// Decoded outline. May be empty: a drawn-then-erased character keeps
    /// its entry and yields a glyph with no visible ink.
    pub outline: GlyphPath,
}

/// An assembled font, ready for compilation into a binary container.
///
/// Glyph records appear in supported-character order, so two builds over the
/// same store produce identical documents. The document is produced on
/// demand and not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDocument {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    /// One record per drawn character; undrawn characters have no record.
    pub glyphs: Vec<GlyphRecord>,
}

impl FontDocument {
    /// The record for `ch`, if that character was drawn.
    pub fn glyph_for(&self, ch: char) -> Option<&GlyphRecord> {
        self.glyphs.iter().find(|record| record.character == ch)
    }
}
