//! Assembly of stored glyph paths into a font document.
//!
//! Assembly walks the supported character set in its stable order, emits one
//! glyph record per drawn character, and skips undrawn characters entirely:
//! they produce no record, not a blank glyph. Assembly from already-decoded
//! paths is total; assembly from serialized strings recovers per character.

use std::collections::HashMap;

use glyphpad_path::GlyphPath;

use crate::charset;
use crate::document::{
    ADVANCE_WIDTH, ASCENDER, DESCENDER, FontDocument, FontSettings, GlyphRecord, UNITS_PER_EM,
};
use crate::error::FontError;
use crate::store::GlyphStore;

/// Build the record for one drawn character.
///
/// The outline is the path's commands verbatim: design units equal canvas
/// units, so no scaling or axis change happens here. An empty path yields a
/// record with an empty outline.
pub fn glyph_record(character: char, outline: &GlyphPath) -> GlyphRecord {
    GlyphRecord {
        character,
        advance_width: ADVANCE_WIDTH,
        outline: outline.clone(),
    }
}

/// Assemble a document from every drawn character in the store.
///
/// Total: missing characters are omitted, never an error.
pub fn build_font(store: &GlyphStore, settings: &FontSettings) -> FontDocument {
    let glyphs: Vec<GlyphRecord> = store
        .iter()
        .map(|(ch, path)| glyph_record(ch, path))
        .collect();
    log::info!(
        "assembled '{}' with {} glyph(s) of {} supported characters",
        settings.family_name,
        glyphs.len(),
        charset::supported_characters().count()
    );
    FontDocument {
        family_name: settings.family_name.clone(),
        style_name: settings.style_name.clone(),
        units_per_em: UNITS_PER_EM,
        ascender: ASCENDER,
        descender: DESCENDER,
        glyphs,
    }
}

/// Outcome of assembling from serialized path strings.
///
/// One bad entry must not block the rest of the alphabet, so decode failures
/// skip that character's glyph. They are surfaced here rather than silently
/// dropped, for integrators who want strict behavior.
#[derive(Debug)]
pub struct BuildReport {
    /// The assembled document, covering every entry that decoded.
    pub document: FontDocument,
    /// Characters whose stored strings failed to decode, with the failure.
    pub rejected: Vec<(char, FontError)>,
}

/// Assemble a document from serialized path strings keyed by character.
///
/// Entries for unsupported characters are never visited; entries that fail
/// to decode are skipped and reported. Paths produced by this system's own
/// codec always decode; this guards externally supplied or corrupted data.
pub fn build_font_from_encoded(
    paths: &HashMap<char, String>,
    settings: &FontSettings,
) -> BuildReport {
    let mut glyphs = Vec::new();
    let mut rejected = Vec::new();
    for ch in charset::supported_characters() {
        let Some(data) = paths.get(&ch) else {
            continue;
        };
        match GlyphPath::from_path_data(data) {
            Ok(path) => glyphs.push(glyph_record(ch, &path)),
            Err(source) => {
                log::warn!("skipping glyph for '{ch}': {source}");
                rejected.push((ch, FontError::InvalidPathData { character: ch, source }));
            }
        }
    }

    let document = FontDocument {
        family_name: settings.family_name.clone(),
        style_name: settings.style_name.clone(),
        units_per_em: UNITS_PER_EM,
        ascender: ASCENDER,
        descender: DESCENDER,
        glyphs,
    };
    BuildReport { document, rejected }
}
