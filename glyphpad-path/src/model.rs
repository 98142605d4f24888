//! Glyph path model: ordered strokes of straight-line segments.

use kurbo::{BezPath, Point, Rect};

/// Side length of the logical drawing canvas. Both the canvas space and the
/// font design space are defined over `[0, CANVAS_SIZE]`.
pub const CANVAS_SIZE: f64 = 1000.0;

/// One replayable outline command.
///
/// Commands are ordered: replaying them in sequence reconstructs the drawn
/// outline. Only straight segments are modeled; curves are out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Extend the current subpath with a straight segment to the point.
    LineTo(Point),
}

impl PathCommand {
    /// The command's target point.
    pub fn point(&self) -> Point {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
        }
    }

    /// Single-letter tag used in the serialized form.
    pub fn tag(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
        }
    }
}

/// One continuous pen-down-to-pen-up motion.
///
/// A stroke is never empty and always begins with exactly one `MoveTo`; the
/// representation enforces that by storing the start point separately from
/// the line segments, so an invalid stroke cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    start: Point,
    lines: Vec<Point>,
}

impl Stroke {
    /// A new stroke beginning at the pen-down point.
    pub fn new(start: impl Into<Point>) -> Self {
        Stroke {
            start: start.into(),
            lines: Vec::new(),
        }
    }

    /// A stroke with its line segments already recorded.
    pub fn with_lines(start: impl Into<Point>, lines: Vec<Point>) -> Self {
        Stroke {
            start: start.into(),
            lines,
        }
    }

    /// Append a straight segment ending at `to`.
    pub fn line_to(&mut self, to: impl Into<Point>) {
        self.lines.push(to.into());
    }

    /// The pen-down point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Line segment endpoints, excluding the start point.
    pub fn lines(&self) -> &[Point] {
        &self.lines
    }

    /// Every recorded point, start first.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.start).chain(self.lines.iter().copied())
    }

    /// The stroke's commands: one `MoveTo` followed by its `LineTo`s.
    pub fn commands(&self) -> impl Iterator<Item = PathCommand> + '_ {
        std::iter::once(PathCommand::MoveTo(self.start))
            .chain(self.lines.iter().map(|p| PathCommand::LineTo(*p)))
    }

    /// Number of recorded points (always at least 1).
    pub fn point_count(&self) -> usize {
        1 + self.lines.len()
    }
}

/// The full drawn shape for one character: zero or more strokes in drawing
/// order.
///
/// Stroke order has no effect on the final appearance but is preserved
/// through serialization round-trips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphPath {
    strokes: Vec<Stroke>,
}

impl GlyphPath {
    /// An empty path: nothing drawn yet.
    pub const fn new() -> Self {
        GlyphPath {
            strokes: Vec::new(),
        }
    }

    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        GlyphPath { strokes }
    }

    /// Append a finished stroke.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// True when nothing has been drawn. An empty path is valid: it encodes
    /// to the empty string and assembles into a glyph with no visible ink.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total recorded points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::point_count).sum()
    }

    /// All commands of all strokes, in drawing order.
    pub fn commands(&self) -> impl Iterator<Item = PathCommand> + '_ {
        self.strokes.iter().flat_map(Stroke::commands)
    }

    /// Tight bounds of every recorded point, or `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for point in self.strokes.iter().flat_map(Stroke::points) {
            bounds = Some(match bounds {
                None => Rect::from_points(point, point),
                Some(rect) => rect.union_pt(point),
            });
        }
        bounds
    }

    /// The path as open kurbo polylines, one subpath per stroke. This is the
    /// interchange form for preview rendering.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        for stroke in &self.strokes {
            bez.move_to(stroke.start);
            for point in &stroke.lines {
                bez.line_to(*point);
            }
        }
        bez
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_starts_with_move() {
        let mut stroke = Stroke::new((10.0, 20.0));
        stroke.line_to((30.0, 40.0));
        let commands: Vec<_> = stroke.commands().collect();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(10.0, 20.0)));
        assert_eq!(commands[1], PathCommand::LineTo(Point::new(30.0, 40.0)));
    }

    #[test]
    fn test_empty_path() {
        let path = GlyphPath::new();
        assert!(path.is_empty());
        assert_eq!(path.point_count(), 0);
        assert_eq!(path.commands().count(), 0);
        assert!(path.bounding_box().is_none());
    }

    #[test]
    fn test_bounding_box_covers_all_strokes() {
        let mut path = GlyphPath::new();
        path.push(Stroke::with_lines((100.0, 100.0), vec![Point::new(200.0, 150.0)]));
        path.push(Stroke::new((50.0, 400.0)));
        let bounds = path.bounding_box().unwrap();
        assert_eq!(bounds.x0, 50.0);
        assert_eq!(bounds.y0, 100.0);
        assert_eq!(bounds.x1, 200.0);
        assert_eq!(bounds.y1, 400.0);
    }

    #[test]
    fn test_to_bez_path_one_subpath_per_stroke() {
        let mut path = GlyphPath::new();
        path.push(Stroke::with_lines((0.0, 0.0), vec![Point::new(10.0, 0.0)]));
        path.push(Stroke::with_lines((5.0, 5.0), vec![Point::new(5.0, 15.0)]));
        let bez = path.to_bez_path();
        let moves = bez
            .elements()
            .iter()
            .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2, "each stroke should open its own subpath");
    }
}
