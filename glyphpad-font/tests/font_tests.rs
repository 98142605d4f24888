//! Integration tests for the glyphpad-font crate.
//!
//! The end-to-end tests compile a document to TTF bytes and read them back
//! with skrifa, walking the glyph outlines the way a font consumer would.

use std::collections::HashMap;

use glyphpad_font::{
    FontSettings, GlyphPath, GlyphStore, build_font, build_font_from_encoded, compile,
};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::TableProvider;
use skrifa::{FontRef, MetadataProvider};

/// Pen that records every command skrifa replays from the compiled glyf
/// outline.
#[derive(Default)]
struct RecordingPen {
    moves: Vec<(f32, f32)>,
    lines: Vec<(f32, f32)>,
    closes: usize,
}

impl OutlinePen for RecordingPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.moves.push((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.lines.push((x, y));
    }

    fn quad_to(&mut self, _cx0: f32, _cy0: f32, _x: f32, _y: f32) {
        panic!("line-only outlines must not produce quadratic segments");
    }

    fn curve_to(&mut self, _cx0: f32, _cy0: f32, _cx1: f32, _cy1: f32, _x: f32, _y: f32) {
        panic!("line-only outlines must not produce cubic segments");
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

fn store_with(entries: &[(char, &str)]) -> GlyphStore {
    let mut store = GlyphStore::new();
    for (ch, data) in entries {
        store.insert_encoded(*ch, data).unwrap();
    }
    store
}

#[test]
fn test_build_font_skips_undrawn() {
    let store = store_with(&[('A', "M 0 0 L 10 10"), ('B', "M 5 5 L 6 6")]);
    let document = build_font(&store, &FontSettings::default());
    assert_eq!(document.glyphs.len(), 2, "72 supported, 2 drawn, 2 records");
}

#[test]
fn test_end_to_end_single_letter_font() {
    let store = store_with(&[('L', "M 100 100 L 200 100 L 200 200")]);
    let document = build_font(&store, &FontSettings::default());

    let record = document.glyph_for('L').expect("drawn glyph present");
    assert_eq!(record.advance_width, 1000);
    assert_eq!(record.outline.point_count(), 3);

    let bytes = compile(&document).expect("compile should succeed");
    let font = FontRef::new(&bytes).expect("compiled bytes should parse");

    // .notdef plus the one drawn glyph
    assert_eq!(font.maxp().unwrap().num_glyphs(), 2);

    let gid = font
        .charmap()
        .map('L')
        .expect("cmap should expose the drawn character");
    let mut pen = RecordingPen::default();
    font.outline_glyphs()
        .get(gid)
        .expect("glyf should hold an outline for the glyph")
        .draw(
            DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
            &mut pen,
        )
        .expect("outline should draw");

    assert_eq!(pen.moves, vec![(100.0, 100.0)], "one contour, drawn start");
    assert_eq!(
        pen.lines,
        vec![(200.0, 100.0), (200.0, 200.0)],
        "straight segments replay in drawing order"
    );
    assert_eq!(pen.moves.len() + pen.lines.len(), 3, "3-point outline");
    assert_eq!(pen.closes, 1);
}

#[test]
fn test_reloaded_metrics_match_constants() {
    let store = store_with(&[('L', "M 100 100 L 200 100 L 200 200")]);
    let document = build_font(&store, &FontSettings::default());
    let bytes = compile(&document).unwrap();
    let font = FontRef::new(&bytes).unwrap();

    let metrics = font.metrics(Size::unscaled(), LocationRef::default());
    assert_eq!(metrics.units_per_em, 1000);
    assert_eq!(metrics.ascent, 800.0);
    assert_eq!(metrics.descent, -200.0);

    let gid = font.charmap().map('L').unwrap();
    let advance = font
        .glyph_metrics(Size::unscaled(), LocationRef::default())
        .advance_width(gid);
    assert_eq!(advance, Some(1000.0));
}

#[test]
fn test_undrawn_characters_absent_from_cmap() {
    let store = store_with(&[('B', "M 10 10 L 20 20")]);
    let document = build_font(&store, &FontSettings::default());
    let bytes = compile(&document).unwrap();
    let font = FontRef::new(&bytes).unwrap();

    assert!(font.charmap().map('B').is_some());
    assert!(
        font.charmap().map('A').is_none(),
        "undrawn characters produce no glyph, not a blank one"
    );
}

#[test]
fn test_multi_stroke_glyph_round_trips_as_two_contours() {
    // Two disjoint strokes, like the bar and dot of an "i".
    let store = store_with(&[('i', "M 500 300 L 500 700 M 500 100 L 510 110")]);
    let document = build_font(&store, &FontSettings::default());
    let bytes = compile(&document).unwrap();
    let font = FontRef::new(&bytes).unwrap();

    let gid = font.charmap().map('i').unwrap();
    let mut pen = RecordingPen::default();
    font.outline_glyphs()
        .get(gid)
        .unwrap()
        .draw(
            DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
            &mut pen,
        )
        .unwrap();
    assert_eq!(pen.moves.len(), 2, "each stroke becomes its own contour");
    assert_eq!(pen.closes, 2);
}

#[test]
fn test_lenient_build_from_encoded_paths() {
    let mut paths = HashMap::new();
    paths.insert('A', "M 0 0 L 100 100".to_string());
    paths.insert('B', "not a path".to_string());

    let report = build_font_from_encoded(&paths, &FontSettings::default());
    assert_eq!(report.document.glyphs.len(), 1);
    assert_eq!(report.rejected.len(), 1, "bad entry surfaced, not dropped");

    // The surviving document still compiles and exposes 'A'.
    let bytes = compile(&report.document).unwrap();
    let font = FontRef::new(&bytes).unwrap();
    assert!(font.charmap().map('A').is_some());
}

#[test]
fn test_custom_names_reach_the_name_table() {
    let settings = FontSettings {
        family_name: "Scrawl".to_string(),
        style_name: "Regular".to_string(),
    };
    let store = store_with(&[('A', "M 0 0 L 1 1")]);
    let document = build_font(&store, &settings);
    let bytes = compile(&document).unwrap();
    let font = FontRef::new(&bytes).unwrap();

    let name = font.name().expect("name table present");
    let family = name
        .name_record()
        .iter()
        .find(|record| record.name_id() == skrifa::raw::types::NameId::FAMILY_NAME)
        .expect("family name record present");
    let value = family
        .string(name.string_data())
        .expect("family name readable")
        .to_string();
    assert_eq!(value, "Scrawl");
}

#[test]
fn test_empty_outline_entry_yields_blank_glyph() {
    let mut store = GlyphStore::new();
    store.insert('A', GlyphPath::new()).unwrap();
    let document = build_font(&store, &FontSettings::default());
    assert_eq!(document.glyphs.len(), 1);

    let bytes = compile(&document).unwrap();
    let font = FontRef::new(&bytes).unwrap();
    let gid = font.charmap().map('A').expect("drawn-but-empty is still mapped");
    let mut pen = RecordingPen::default();
    if let Some(outline) = font.outline_glyphs().get(gid) {
        outline
            .draw(
                DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
                &mut pen,
            )
            .unwrap();
    }
    assert!(pen.moves.is_empty(), "no ink for an empty outline");
}
