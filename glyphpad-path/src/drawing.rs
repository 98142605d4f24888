//! Mutable drawing state for one character.
//!
//! A drawing surface reduces pointer/touch events to logical canvas samples
//! and feeds them in here; this type never sees the event source. A stroke
//! runs from `pen_down` through any number of `pen_move`s to `pen_up`.
//! Saving is the caller's job: snapshot with [`Drawing::to_path`] and store
//! the result, replacing the character's previous path wholesale.

use kurbo::Point;

use crate::model::{GlyphPath, Stroke};

/// Default eraser reach in canvas units.
pub const ERASE_RADIUS: f64 = 20.0;

/// In-progress editing state: recorded strokes plus whether the pen is down.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    strokes: Vec<Stroke>,
    active: bool,
}

impl Drawing {
    /// An empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously saved path, for re-editing a character.
    pub fn from_path(path: &GlyphPath) -> Self {
        Drawing {
            strokes: path.strokes().to_vec(),
            active: false,
        }
    }

    /// Begin a new stroke at the sample point.
    pub fn pen_down(&mut self, at: impl Into<Point>) {
        self.strokes.push(Stroke::new(at));
        self.active = true;
    }

    /// Extend the active stroke with a straight segment. Samples that arrive
    /// while the pen is up are ignored.
    pub fn pen_move(&mut self, to: impl Into<Point>) {
        if !self.active {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.line_to(to);
        }
    }

    /// End the active stroke. A pen-down with no movement leaves a
    /// single-point stroke (a dot tap, e.g. the dot of an "i").
    pub fn pen_up(&mut self) {
        self.active = false;
    }

    /// Remove every recorded point within `radius` of `center`.
    ///
    /// A stroke that loses interior points splits into one stroke per
    /// contiguous surviving run, so every stroke still starts at a pen-down
    /// point; strokes erased entirely are dropped. Erasing lifts the pen.
    pub fn erase_near(&mut self, center: impl Into<Point>, radius: f64) {
        let center = center.into();
        let before = self.point_count();

        let mut survivors: Vec<Stroke> = Vec::new();
        for stroke in self.strokes.drain(..) {
            let mut run: Option<Stroke> = None;
            for point in stroke.points() {
                if point.distance(center) <= radius {
                    if let Some(done) = run.take() {
                        survivors.push(done);
                    }
                } else {
                    match run.as_mut() {
                        Some(current) => current.line_to(point),
                        None => run = Some(Stroke::new(point)),
                    }
                }
            }
            if let Some(done) = run {
                survivors.push(done);
            }
        }
        self.strokes = survivors;
        self.active = false;

        log::debug!(
            "erased {} point(s) within {radius} of ({}, {})",
            before - self.point_count(),
            center.x,
            center.y
        );
    }

    /// Discard everything drawn so far.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = false;
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::point_count).sum()
    }

    /// The recorded strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Snapshot the current state as a glyph path.
    pub fn to_path(&self) -> GlyphPath {
        GlyphPath::from_strokes(self.strokes.clone())
    }

    /// Consume the drawing, yielding its glyph path.
    pub fn into_path(self) -> GlyphPath {
        GlyphPath::from_strokes(self.strokes)
    }
}
