//! Text codec for glyph paths.
//!
//! A path serializes to whitespace-separated `<tag> <x> <y>` triples, e.g.
//! `"M 100 100 L 200 100 L 200 200"`. No stroke boundary marker is emitted:
//! boundaries are recoverable because every stroke starts with `M` and `M`
//! never occurs mid-stroke. The encoded form is also valid SVG path data,
//! which is what lets a drawing surface feed it straight into a `<path d>`
//! preview.
//!
//! Grammar:
//!
//! ```text
//! path    := "" | command (" " command)*
//! command := tag " " number " " number
//! tag     := "M" | "L"
//! number  := finite decimal, ASCII
//! ```

use kurbo::Point;

use crate::error::MalformedPath;
use crate::model::{GlyphPath, Stroke};

/// Serialize a glyph path to its text form.
///
/// Coordinates are printed with `f64`'s shortest round-trip representation,
/// so decoding the result reproduces the path exactly. An empty path encodes
/// to the empty string. Total; never fails.
pub fn encode(path: &GlyphPath) -> String {
    path.commands()
        .map(|command| {
            let point = command.point();
            format!("{} {} {}", command.tag(), point.x, point.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse serialized path data back into a glyph path.
///
/// Commands are grouped into strokes by starting a new stroke at every `M`
/// and appending `L` commands to the current stroke. The empty string
/// decodes to an empty path (an undrawn or fully erased character).
///
/// Fails with [`MalformedPath`] on a truncated command, a coordinate that is
/// not a finite number, a tag outside `{M, L}`, or a non-empty path whose
/// first command is not `M`.
pub fn decode(data: &str) -> Result<GlyphPath, MalformedPath> {
    if data.is_empty() {
        return Ok(GlyphPath::new());
    }

    let mut strokes: Vec<Stroke> = Vec::new();
    let mut tokens = data.split(' ');
    while let Some(tag) = tokens.next() {
        match tag {
            "M" => {
                let point = read_point('M', &mut tokens)?;
                strokes.push(Stroke::new(point));
            }
            "L" => {
                let Some(stroke) = strokes.last_mut() else {
                    return Err(MalformedPath::MissingLeadingMove);
                };
                let point = read_point('L', &mut tokens)?;
                stroke.line_to(point);
            }
            other => return Err(MalformedPath::UnknownTag(other.to_string())),
        }
    }
    Ok(GlyphPath::from_strokes(strokes))
}

fn read_point<'a>(
    tag: char,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Point, MalformedPath> {
    let x = read_coordinate(tag, tokens)?;
    let y = read_coordinate(tag, tokens)?;
    Ok(Point::new(x, y))
}

fn read_coordinate<'a>(
    tag: char,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<f64, MalformedPath> {
    let token = tokens
        .next()
        .ok_or(MalformedPath::MissingCoordinate { tag })?;
    let value: f64 = token
        .parse()
        .map_err(|_| MalformedPath::InvalidCoordinate(token.to_string()))?;
    // `f64::from_str` accepts "NaN" and "inf" spellings; coordinates must be
    // finite numbers.
    if !value.is_finite() {
        return Err(MalformedPath::InvalidCoordinate(token.to_string()));
    }
    Ok(value)
}

impl GlyphPath {
    /// Serialize this path; see [`encode`].
    pub fn to_path_data(&self) -> String {
        encode(self)
    }

    /// Parse serialized path data; see [`decode`].
    pub fn from_path_data(data: &str) -> Result<Self, MalformedPath> {
        decode(data)
    }
}
