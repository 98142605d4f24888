//! Typed error for path data parsing.

use thiserror::Error;

/// A serialized path string that does not follow the path data grammar.
///
/// Produced by [`codec::decode`](crate::codec::decode). Every variant names
/// the offending token so callers can report which part of a stored string
/// went bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPath {
    /// A command tag other than `M` or `L` was found. Doubled or trailing
    /// separators surface here as an empty tag.
    #[error("unknown path command tag '{0}'")]
    UnknownTag(String),

    /// A command ended before both of its coordinates were read.
    #[error("'{tag}' command is missing a coordinate")]
    MissingCoordinate {
        /// The tag of the truncated command.
        tag: char,
    },

    /// A coordinate field did not parse as a finite number.
    #[error("invalid coordinate '{0}': not a finite number")]
    InvalidCoordinate(String),

    /// A non-empty path whose first command is not `M`. Strokes always
    /// begin at a pen-down, so there is nothing for a leading `L` to extend.
    #[error("path must start with an 'M' command")]
    MissingLeadingMove,
}
