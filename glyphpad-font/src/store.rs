//! Owned keyed store for per-character glyph paths.
//!
//! One store holds a session's drawings: at most one path per supported
//! character. A completed save replaces the character's whole path; there
//! are no partial updates. Keys never depend on each other's state, so a
//! caller that wants concurrent saves can put the store behind a single
//! lock without cross-key interference.

use std::collections::HashMap;

use glyphpad_path::GlyphPath;

use crate::charset;
use crate::error::FontError;

/// Mapping from supported character to its drawn glyph path.
///
/// A character with no entry is "undrawn" and produces no glyph during
/// assembly. An entry holding an empty path is different: that character was
/// drawn (then perhaps fully erased) and produces a glyph with no ink.
#[derive(Debug, Clone, Default)]
pub struct GlyphStore {
    paths: HashMap<char, GlyphPath>,
}

impl GlyphStore {
    /// An empty store: nothing drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the finished path for `ch`, replacing any previous one.
    ///
    /// Returns the replaced path, if the character had one. Characters
    /// outside the supported set are rejected; they could never be emitted.
    pub fn insert(&mut self, ch: char, path: GlyphPath) -> Result<Option<GlyphPath>, FontError> {
        if !charset::is_supported(ch) {
            return Err(FontError::UnsupportedCharacter(ch));
        }
        log::debug!("saving path for '{ch}' ({} strokes)", path.stroke_count());
        Ok(self.paths.insert(ch, path))
    }

    /// Decode a serialized path string and store it for `ch`.
    ///
    /// This is the entry point for externally supplied path data; strings
    /// produced by this system's own codec always decode.
    pub fn insert_encoded(&mut self, ch: char, data: &str) -> Result<Option<GlyphPath>, FontError> {
        let path = GlyphPath::from_path_data(data)
            .map_err(|source| FontError::InvalidPathData { character: ch, source })?;
        self.insert(ch, path)
    }

    /// Forget the drawing for `ch`, returning it. The character becomes
    /// undrawn again.
    pub fn remove(&mut self, ch: char) -> Option<GlyphPath> {
        self.paths.remove(&ch)
    }

    /// The stored path for `ch`, if drawn.
    pub fn get(&self, ch: char) -> Option<&GlyphPath> {
        self.paths.get(&ch)
    }

    /// Whether `ch` has a stored path.
    pub fn is_drawn(&self, ch: char) -> bool {
        self.paths.contains_key(&ch)
    }

    /// Number of characters with a stored path.
    pub fn drawn_count(&self) -> usize {
        self.paths.len()
    }

    /// Drawn entries in supported-character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &GlyphPath)> + '_ {
        charset::supported_characters().filter_map(|ch| self.paths.get(&ch).map(|path| (ch, path)))
    }

    /// Discard every stored path.
    pub fn clear(&mut self) {
        self.paths.clear();
    }
}
