//! Compilation of a font document into a binary TTF container.
//!
//! The binary table layout itself is delegated to write-fonts; this module
//! owns the mapping from stroke data to glyf contours and metrics. Glyph 0
//! is always `.notdef` (empty), and drawn characters follow in document
//! order at glyph IDs 1..=N.

use std::path::Path;

use write_fonts::FontBuilder;
use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::glyf::{Bbox, Contour, CurvePoint, GlyfLocaBuilder, Glyph, SimpleGlyph};
use write_fonts::tables::head::Head;
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::loca::LocaFormat;
use write_fonts::tables::maxp::Maxp;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::tables::os2::Os2;
use write_fonts::tables::post::Post;
use write_fonts::types::{FWord, GlyphId16, NameId, UfWord};

use glyphpad_path::GlyphPath;

use crate::document::{ADVANCE_WIDTH, FontDocument};
use crate::error::FontError;

/// Integer bounds of the contours actually emitted for a glyph, in design
/// units. Tracked from the rounded points so they agree with the compiled
/// outline.
#[derive(Debug, Clone, Copy, Default)]
struct Bounds {
    x_min: i16,
    y_min: i16,
    x_max: i16,
    y_max: i16,
}

impl Bounds {
    fn add(bounds: Option<Bounds>, x: i16, y: i16) -> Option<Bounds> {
        Some(match bounds {
            None => Bounds {
                x_min: x,
                y_min: y,
                x_max: x,
                y_max: y,
            },
            Some(b) => Bounds {
                x_min: b.x_min.min(x),
                y_min: b.y_min.min(y),
                x_max: b.x_max.max(x),
                y_max: b.y_max.max(y),
            },
        })
    }

    fn union(bounds: Option<Bounds>, other: Option<Bounds>) -> Option<Bounds> {
        match (bounds, other) {
            (b, None) => b,
            (None, o) => o,
            (Some(b), Some(o)) => {
                let b = Bounds::add(Some(b), o.x_min, o.y_min);
                Bounds::add(b, o.x_max, o.y_max)
            }
        }
    }
}

/// One glyph ready for the glyf builder, plus what the metric tables need
/// to know about it.
struct CompiledGlyph {
    glyph: Glyph,
    bounds: Option<Bounds>,
    point_count: u16,
    contour_count: u16,
}

/// Convert one record's outline into a glyf glyph.
///
/// Commands map directly: each stroke with at least two points becomes one
/// contour of on-curve points. glyf contours close implicitly when rendered,
/// so a stroke drawn back to its exact start sheds the duplicate end point.
/// A single-point stroke carries no ink in a line-only outline and is
/// dropped here, and only here; it round-trips everywhere else. A path
/// with no usable contour compiles as an empty glyph.
fn compile_glyph(character: char, outline: &GlyphPath) -> CompiledGlyph {
    let mut contours: Vec<Contour> = Vec::new();
    let mut bounds = None;
    let mut point_count: u16 = 0;

    for stroke in outline.strokes() {
        if stroke.point_count() < 2 {
            log::debug!("dropping single-point stroke in glyph '{character}'");
            continue;
        }
        let mut points: Vec<CurvePoint> = stroke
            .points()
            .map(|p| CurvePoint::new(p.x.round() as i16, p.y.round() as i16, true))
            .collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        for point in &points {
            bounds = Bounds::add(bounds, point.x, point.y);
        }
        point_count += points.len() as u16;
        contours.push(points.into());
    }

    if contours.is_empty() {
        return CompiledGlyph {
            glyph: Glyph::Empty,
            bounds: None,
            point_count: 0,
            contour_count: 0,
        };
    }

    let bbox = bounds
        .map(|b| Bbox {
            x_min: b.x_min,
            y_min: b.y_min,
            x_max: b.x_max,
            y_max: b.y_max,
        })
        .unwrap_or_default();
    let contour_count = contours.len() as u16;
    CompiledGlyph {
        glyph: Glyph::Simple(SimpleGlyph {
            bbox,
            contours,
            instructions: Vec::new(),
        }),
        bounds,
        point_count,
        contour_count,
    }
}

/// Compile the document into TTF bytes.
///
/// Emits glyf/loca, cmap, hmtx, head, hhea, maxp, name, OS/2, and post.
/// Missing characters were already omitted during assembly; the only
/// failures left come from table construction itself.
pub fn compile(document: &FontDocument) -> Result<Vec<u8>, FontError> {
    let glyph_count = u16::try_from(document.glyphs.len() + 1)
        .map_err(|_| FontError::TableBuild("too many glyphs".to_string()))?;

    // -----------------------------------------------------------------------
    // Outlines and per-glyph metrics. Glyph 0 is .notdef.
    // -----------------------------------------------------------------------
    let mut glyf_builder = GlyfLocaBuilder::new();
    glyf_builder.add_glyph(&Glyph::Empty).map_err(table_err)?;

    let mut h_metrics = vec![LongMetric {
        advance: ADVANCE_WIDTH,
        side_bearing: 0,
    }];
    let mut font_bounds: Option<Bounds> = None;
    let mut max_points: u16 = 0;
    let mut max_contours: u16 = 0;

    for record in &document.glyphs {
        let compiled = compile_glyph(record.character, &record.outline);
        glyf_builder.add_glyph(&compiled.glyph).map_err(table_err)?;
        h_metrics.push(LongMetric {
            advance: record.advance_width,
            side_bearing: compiled.bounds.map(|b| b.x_min).unwrap_or(0),
        });
        font_bounds = Bounds::union(font_bounds, compiled.bounds);
        max_points = max_points.max(compiled.point_count);
        max_contours = max_contours.max(compiled.contour_count);
    }
    let (glyf, loca, loca_format) = glyf_builder.build();
    let bbox = font_bounds.unwrap_or_default();

    // -----------------------------------------------------------------------
    // Character mapping: drawn characters at GIDs 1..=N, document order.
    // -----------------------------------------------------------------------
    let mappings = document
        .glyphs
        .iter()
        .enumerate()
        .map(|(index, record)| (record.character, GlyphId16::new(index as u16 + 1)));
    let cmap = Cmap::from_mappings(mappings).map_err(table_err)?;

    // -----------------------------------------------------------------------
    // Global metrics and limits.
    // -----------------------------------------------------------------------
    let head = Head {
        units_per_em: document.units_per_em,
        flags: 0x0003,
        x_min: bbox.x_min,
        y_min: bbox.y_min,
        x_max: bbox.x_max,
        y_max: bbox.y_max,
        lowest_rec_ppem: 8,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
        ..Default::default()
    };

    let min_side_bearing = h_metrics[1..]
        .iter()
        .map(|metric| metric.side_bearing)
        .min()
        .unwrap_or(0);
    let hhea = Hhea {
        ascender: FWord::new(document.ascender),
        descender: FWord::new(document.descender),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(
            h_metrics.iter().map(|metric| metric.advance).max().unwrap_or(0),
        ),
        min_left_side_bearing: FWord::new(min_side_bearing),
        min_right_side_bearing: FWord::new(min_side_bearing),
        x_max_extent: FWord::new(bbox.x_max),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_long_metrics: glyph_count,
        ..Default::default()
    };

    let maxp = Maxp {
        num_glyphs: glyph_count,
        max_points: Some(max_points),
        max_contours: Some(max_contours),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
        ..Default::default()
    };

    let hmtx = Hmtx {
        h_metrics,
        left_side_bearings: Vec::new(),
    };

    let code_points: Vec<u32> = document
        .glyphs
        .iter()
        .map(|record| record.character as u32)
        .collect();
    let os2 = Os2 {
        us_weight_class: 400,
        us_width_class: 5,
        s_typo_ascender: document.ascender,
        s_typo_descender: document.descender,
        s_typo_line_gap: 0,
        us_win_ascent: document.ascender.max(bbox.y_max).max(0) as u16,
        us_win_descent: document.descender.min(bbox.y_min).unsigned_abs(),
        us_first_char_index: code_points.iter().min().copied().unwrap_or(0) as u16,
        us_last_char_index: code_points.iter().max().copied().unwrap_or(0) as u16,
        ..Default::default()
    };

    // -----------------------------------------------------------------------
    // Naming.
    // -----------------------------------------------------------------------
    let full_name = format!("{} {}", document.family_name, document.style_name);
    let postscript_name = format!(
        "{}-{}",
        document.family_name.replace(' ', ""),
        document.style_name.replace(' ', "")
    );
    let records = vec![
        name_record(NameId::FAMILY_NAME, document.family_name.clone()),
        name_record(NameId::SUBFAMILY_NAME, document.style_name.clone()),
        name_record(NameId::FULL_NAME, full_name),
        name_record(NameId::POSTSCRIPT_NAME, postscript_name),
        name_record(NameId::VERSION_STRING, "Version 1.0".to_string()),
    ];
    let name = Name::new(records.into_iter().collect());

    let glyph_names: Vec<String> = std::iter::once(".notdef".to_string())
        .chain(
            document
                .glyphs
                .iter()
                .map(|record| record.character.to_string()),
        )
        .collect();
    let post = Post::new_v2(glyph_names.iter().map(String::as_str));

    // -----------------------------------------------------------------------
    // Container assembly.
    // -----------------------------------------------------------------------
    let mut builder = FontBuilder::default();
    builder.add_table(&head).map_err(table_err)?;
    builder.add_table(&hhea).map_err(table_err)?;
    builder.add_table(&maxp).map_err(table_err)?;
    builder.add_table(&hmtx).map_err(table_err)?;
    builder.add_table(&cmap).map_err(table_err)?;
    builder.add_table(&glyf).map_err(table_err)?;
    builder.add_table(&loca).map_err(table_err)?;
    builder.add_table(&os2).map_err(table_err)?;
    builder.add_table(&name).map_err(table_err)?;
    builder.add_table(&post).map_err(table_err)?;
    let bytes = builder.build();

    log::info!(
        "compiled '{}' with {} glyph(s) into {} bytes",
        document.family_name,
        glyph_count,
        bytes.len()
    );
    Ok(bytes)
}

/// Compile the document and write it to `path`, the library-side
/// equivalent of the drawing UI's download button.
pub fn write_font_file(document: &FontDocument, path: impl AsRef<Path>) -> Result<(), FontError> {
    let path = path.as_ref();
    let bytes = compile(document)?;
    std::fs::write(path, &bytes)?;
    log::info!("wrote font to {}", path.display());
    Ok(())
}

fn name_record(name_id: NameId, value: String) -> NameRecord {
    // Windows, Unicode BMP, US English.
    NameRecord::new(3, 1, 0x409, name_id, value.into())
}

fn table_err(err: impl std::fmt::Display) -> FontError {
    FontError::TableBuild(err.to_string())
}
