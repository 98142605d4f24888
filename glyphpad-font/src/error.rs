//! Typed error variants for the glyphpad-font crate.
//!
//! Callers at the crate boundary can match on specific failure modes: a
//! character outside the supported set, a stored path string that fails to
//! decode, or a table-construction failure inside the font writer.

use glyphpad_path::MalformedPath;
use thiserror::Error;

/// Top-level error type for glyph storage, assembly, and compilation.
#[derive(Debug, Error)]
pub enum FontError {
    /// The character is not in the fixed supported set, so no glyph can be
    /// stored or emitted for it.
    #[error("character '{0}' is not in the supported character set")]
    UnsupportedCharacter(char),

    /// A serialized path string failed to decode. Paths produced by this
    /// system's own codec never hit this; externally supplied or corrupted
    /// strings can.
    #[error("invalid path data for character '{character}'")]
    InvalidPathData {
        /// The character whose stored string went bad.
        character: char,
        /// The underlying parse failure.
        #[source]
        source: MalformedPath,
    },

    /// A font table could not be constructed or serialized.
    #[error("font table construction failed: {0}")]
    TableBuild(String),

    /// The compiled font could not be written to disk.
    #[error("failed to write font file: {0}")]
    Io(#[from] std::io::Error),
}
