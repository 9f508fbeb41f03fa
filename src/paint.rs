// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing the document into a vello scene.
//!
//! Everything is drawn in curve space and mapped to the screen by the
//! viewport transform, so stroke widths scale with zoom.

use crate::editing::{CurvedTextField, FieldVisuals, HandleVisual};
use crate::model::{Document, Item};
use crate::settings::Settings;
use crate::theme;
use kurbo::{Affine, BezPath, Circle, Line, Point, Rect, Stroke, Vec2};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Fill};
use parley::{FontContext, FontFamily, FontStack, GenericFamily, LayoutContext};

/// Extra width of the outline drawn under a field's path
const PATH_BORDER_WIDTH: f64 = 0.5;

/// Gap that swallows everything after the visible part of a path
const TRUNCATION_GAP_SLACK: f64 = 9001.0;

/// Radius of a touch selection handle knob
const HANDLE_RADIUS: f64 = 2.0;

/// Draw the grid, every item, and every field's caret and selection.
pub fn paint_document(scene: &mut Scene, doc: &Document) {
    let transform = doc.viewport.affine();
    paint_grid(scene, doc.settings(), transform);

    let image_brush = Brush::Solid(theme::canvas::IMAGE_PLACEHOLDER);
    let cell_size = Vec2::new(doc.settings().cell_size.0, doc.settings().cell_size.1);
    for item in doc.items() {
        match item {
            Item::Text(field) => paint_field(scene, field, transform),
            Item::Image(image) => {
                let origin = Point::new(
                    image.origin.x as f64 * cell_size.x,
                    image.origin.y as f64 * cell_size.y,
                );
                let rect = Rect::from_origin_size(
                    origin,
                    (
                        image.columns as f64 * cell_size.x,
                        image.rows as f64 * cell_size.y,
                    ),
                );
                scene.fill(Fill::NonZero, transform, &image_brush, None, &rect);
            }
        }
    }
}

fn paint_grid(scene: &mut Scene, settings: &Settings, transform: Affine) {
    let (cw, ch) = settings.cell_size;
    let (columns, rows) = settings.grid_size;
    let width = columns as f64 * cw;
    let height = rows as f64 * ch;

    let background = Rect::new(0.0, 0.0, width, height);
    let brush = Brush::Solid(theme::canvas::BACKGROUND);
    scene.fill(Fill::NonZero, transform, &brush, None, &background);

    let mut grid = BezPath::new();
    for x in 0..=columns {
        let x = x as f64 * cw;
        grid.move_to((x, 0.0));
        grid.line_to((x, height));
    }
    for y in 0..=rows {
        let y = y as f64 * ch;
        grid.move_to((0.0, y));
        grid.line_to((width, y));
    }
    let stroke = Stroke::new(0.1);
    let brush = Brush::Solid(theme::canvas::GRID_LINE);
    scene.stroke(&stroke, transform, &brush, None, &grid);
}

/// Draw one curved text field.
pub fn paint_field(scene: &mut Scene, field: &CurvedTextField, transform: Affine) {
    let settings = field.settings();
    let path = field.path();
    if path.is_empty() {
        return;
    }

    // Path, with its reserve tail hidden
    let truncation = path.truncation();
    let dash = |stroke: Stroke| {
        if truncation.reserve_length > 0.0 {
            stroke.with_dashes(
                0.0,
                [
                    truncation.visible_length,
                    truncation.reserve_length + TRUNCATION_GAP_SLACK,
                ],
            )
        } else {
            stroke
        }
    };
    let border = dash(Stroke::new(settings.path_thickness + PATH_BORDER_WIDTH));
    scene.stroke(
        &border,
        transform,
        &Brush::Solid(theme::field::PATH_BORDER),
        None,
        path.bez(),
    );
    let body = dash(Stroke::new(settings.path_thickness));
    scene.stroke(
        &body,
        transform,
        &Brush::Solid(theme::field::PATH),
        None,
        path.bez(),
    );

    paint_glyphs(scene, field, transform);
    paint_visuals(scene, field, field.visuals(), transform);
}

/// Draw each character rotated to the curve, vertically centered on it.
fn paint_glyphs(scene: &mut Scene, field: &CurvedTextField, transform: Affine) {
    let placements = field.layout().glyph_placements();
    if placements.is_empty() {
        return;
    }

    let mut font_cx = FontContext::default();
    let mut layout_cx = LayoutContext::new();
    let brushes = vec![Brush::Solid(theme::field::TEXT)];
    let font_size = field.settings().font_size as f32;
    let mut buf = [0u8; 4];

    for glyph in placements {
        let text: &str = glyph.ch.encode_utf8(&mut buf);
        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(font_size));
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            FontFamily::Generic(GenericFamily::SansSerif),
        )));
        builder.push_default(StyleProperty::Brush(BrushIndex(0)));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);

        let half_height = layout.height() as f64 / 2.0;
        let glyph_transform = transform
            * Affine::translate(glyph.origin.to_vec2())
            * Affine::rotate(glyph.angle)
            * Affine::translate((0.0, -half_height));
        render_text(scene, glyph_transform, &layout, &brushes, false);
    }
}

fn paint_visuals(
    scene: &mut Scene,
    field: &CurvedTextField,
    visuals: &FieldVisuals,
    transform: Affine,
) {
    let settings = field.settings();

    if let Some(selection) = visuals.selection {
        let stroke = Stroke::new(settings.path_thickness * settings.selection_thickness_ratio)
            .with_dashes(0.0, selection.dashes);
        scene.stroke(
            &stroke,
            transform,
            &Brush::Solid(theme::field::SELECTION),
            None,
            field.path().bez(),
        );
    }

    if let Some(caret) = visuals.caret
        && field.caret_shown()
    {
        let stroke = Stroke::new(settings.caret_width);
        scene.stroke(
            &stroke,
            transform,
            &Brush::Solid(theme::field::CARET),
            None,
            &caret.line,
        );
    }

    for handle in visuals.handles.iter().flatten() {
        paint_handle(scene, handle, settings.font_size, transform);
    }
}

/// A stem from the selection boundary down to a round knob, hanging to the
/// outside of the selection.
fn paint_handle(scene: &mut Scene, handle: &HandleVisual, font_size: f64, transform: Affine) {
    let color = if handle.attached {
        theme::field::HANDLE
    } else {
        theme::field::HANDLE_DETACHED
    };
    let brush = Brush::Solid(color);
    let local = transform
        * Affine::translate(handle.position.to_vec2())
        * Affine::rotate(handle.angle)
        * Affine::scale_non_uniform(handle.scale_x, 1.0);

    let stem_end = Point::new(0.0, font_size / 2.0);
    let knob = Circle::new(
        Point::new(HANDLE_RADIUS, font_size / 2.0 + HANDLE_RADIUS),
        HANDLE_RADIUS,
    );
    scene.stroke(
        &Stroke::new(0.5),
        local,
        &brush,
        None,
        &Line::new(Point::ZERO, stem_end),
    );
    scene.fill(Fill::NonZero, local, &brush, None, &knob);
}

/// Outline cells, e.g. the trail being placed.
pub fn paint_cells(
    scene: &mut Scene,
    cells: impl IntoIterator<Item = crate::grid::GridCell>,
    cell_size: Vec2,
    transform: Affine,
) {
    let brush = Brush::Solid(theme::canvas::CELL_PREVIEW);
    let stroke = Stroke::new(0.5);
    for cell in cells {
        let origin = Point::new(cell.x as f64 * cell_size.x, cell.y as f64 * cell_size.y);
        let rect = Rect::from_origin_size(origin, cell_size.to_size());
        scene.stroke(&stroke, transform, &brush, None, &rect);
    }
}
