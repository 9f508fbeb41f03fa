// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Caret, selection highlight, and touch handles derived from the
//! surrogate's selection.
//!
//! Everything here is recomputed from scratch whenever the text, the
//! selection, focus, or the path changes. Nothing is read back.

use crate::text::layout::TextOnPath;
use crate::text::selection::{SelectionHandle, SelectionState};
use kurbo::{Line, Point, Vec2};

/// Caret drawn across the path at the insertion point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretVisual {
    pub line: Line,
    pub center: Point,
    /// Tangent angle at the caret, radians
    pub angle: f64,
}

/// Selection highlight as a dash pattern over the whole path.
///
/// The pattern is `[0, from, to - from, true_length]`: an empty dash, a gap
/// up to the selection start, the highlighted run, then a gap long enough
/// to swallow the rest of the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionVisual {
    pub from: f64,
    pub to: f64,
    pub dashes: [f64; 4],
}

/// A draggable handle at one end of a touch selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleVisual {
    pub handle: SelectionHandle,
    pub position: Point,
    pub angle: f64,
    /// -1 mirrors the start handle, +1 leaves the end handle as drawn
    pub scale_x: f64,
    pub attached: bool,
}

/// All selection-related decorations of one field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldVisuals {
    pub caret: Option<CaretVisual>,
    pub selection: Option<SelectionVisual>,
    pub handles: Option<[HandleVisual; 2]>,
}

impl FieldVisuals {
    pub fn caret_visible(&self) -> bool {
        self.caret.is_some()
    }

    pub fn selection_visible(&self) -> bool {
        self.selection.is_some()
    }
}

/// Derive the visuals for `selection` on `layout`.
///
/// The caret half-length is `font_size / 2`, perpendicular to the local
/// tangent. Handles are only produced for touch input with a non-empty
/// selection.
pub fn compute_visuals(
    layout: &TextOnPath<'_>,
    selection: SelectionState,
    focused: bool,
    touch: bool,
    font_size: f64,
) -> FieldVisuals {
    let path = layout.path();
    let mut visuals = FieldVisuals::default();

    if selection.is_collapsed() {
        if focused {
            let len = layout.substring_length_clamped(selection.start);
            let center = path.point_at(len);
            let angle = path.tangent_angle_at(len);
            let d = Vec2::new(angle.sin(), -angle.cos()) * (font_size / 2.0);
            visuals.caret = Some(CaretVisual {
                line: Line::new(center - d, center + d),
                center,
                angle,
            });
        }
        return visuals;
    }

    let from = layout.substring_length_clamped(selection.start);
    let to = layout.substring_length_clamped(selection.end);

    if focused {
        visuals.selection = Some(SelectionVisual {
            from,
            to,
            dashes: [0.0, from, to - from, path.true_length()],
        });
    }

    if touch {
        let handle_at = |handle, len: f64, scale_x| HandleVisual {
            handle,
            position: path.point_at(len),
            angle: path.tangent_angle_at(len),
            scale_x,
            attached: focused,
        };
        visuals.handles = Some([
            handle_at(SelectionHandle::Start, from, -1.0),
            handle_at(SelectionHandle::End, to, 1.0),
        ]);
    }

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CurvePath;
    use crate::text::MonospaceMeasure;
    use kurbo::BezPath;

    fn straight(len: f64) -> CurvePath {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 10.0));
        bez.line_to((len, 10.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 0.0);
        path
    }

    #[test]
    fn collapsed_and_focused_shows_caret_only() {
        let path = straight(60.0);
        let measure = MonospaceMeasure::new(5.0);
        let layout = TextOnPath::new(&path, &measure, "abcd");
        let visuals = compute_visuals(&layout, SelectionState::caret_at(2), true, false, 5.0);

        let caret = visuals.caret.unwrap();
        assert!((caret.center.x - 6.0).abs() < 1e-6);
        assert!((caret.center.y - 10.0).abs() < 1e-6);
        // Horizontal path: caret is vertical, 5 units tall
        assert!((caret.line.p0.x - 6.0).abs() < 1e-6);
        assert!((caret.line.p0.y - 12.5).abs() < 1e-6);
        assert!((caret.line.p1.y - 7.5).abs() < 1e-6);
        assert!(!visuals.selection_visible());
        assert!(visuals.handles.is_none());
    }

    #[test]
    fn unfocused_hides_caret_and_selection() {
        let path = straight(60.0);
        let measure = MonospaceMeasure::new(5.0);
        let layout = TextOnPath::new(&path, &measure, "abcd");

        let caret = compute_visuals(&layout, SelectionState::caret_at(1), false, false, 5.0);
        assert_eq!(caret, FieldVisuals::default());

        let range = SelectionState::from_anchor_caret(0, 3);
        let visuals = compute_visuals(&layout, range, false, false, 5.0);
        assert!(!visuals.caret_visible());
        assert!(!visuals.selection_visible());
    }

    #[test]
    fn selection_dash_pattern() {
        let path = straight(60.0);
        let measure = MonospaceMeasure::new(5.0);
        let layout = TextOnPath::new(&path, &measure, "abcdef");
        let selection = SelectionState::from_anchor_caret(5, 2);
        let visuals = compute_visuals(&layout, selection, true, false, 5.0);

        assert!(!visuals.caret_visible());
        let sel = visuals.selection.unwrap();
        assert!((sel.from - 6.0).abs() < 1e-9);
        assert!((sel.to - 15.0).abs() < 1e-9);
        assert_eq!(sel.dashes[0], 0.0);
        assert!((sel.dashes[2] - 9.0).abs() < 1e-9);
        assert!((sel.dashes[3] - 60.0).abs() < 1e-6);
    }

    #[test]
    fn caret_tilts_with_the_path() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((0.0, 40.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 0.0);
        let measure = MonospaceMeasure::new(5.0);
        let layout = TextOnPath::new(&path, &measure, "ab");

        let caret = compute_visuals(&layout, SelectionState::caret_at(1), true, false, 5.0)
            .caret
            .unwrap();
        // Path runs straight down, so the caret lies horizontally
        assert!((caret.line.p0.y - caret.line.p1.y).abs() < 1e-6);
        assert!(((caret.line.p0.x - caret.line.p1.x).abs() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn touch_selection_has_mirrored_handles() {
        let path = straight(60.0);
        let measure = MonospaceMeasure::new(5.0);
        let layout = TextOnPath::new(&path, &measure, "abcdef");
        let selection = SelectionState::from_anchor_caret(1, 4);
        let visuals = compute_visuals(&layout, selection, true, true, 5.0);

        let [start, end] = visuals.handles.unwrap();
        assert_eq!(start.handle, SelectionHandle::Start);
        assert_eq!(start.scale_x, -1.0);
        assert!((start.position.x - 3.0).abs() < 1e-6);
        assert_eq!(end.handle, SelectionHandle::End);
        assert_eq!(end.scale_x, 1.0);
        assert!((end.position.x - 12.0).abs() < 1e-6);
        assert!(start.attached && end.attached);
    }

    #[test]
    fn handles_detach_when_blurred() {
        let path = straight(60.0);
        let measure = MonospaceMeasure::new(5.0);
        let layout = TextOnPath::new(&path, &measure, "abcdef");
        let selection = SelectionState::from_anchor_caret(1, 4);

        let visuals = compute_visuals(&layout, selection, false, true, 5.0);
        let [start, end] = visuals.handles.unwrap();
        assert!(!start.attached && !end.attached);

        let mouse = compute_visuals(&layout, selection, true, false, 5.0);
        assert!(mouse.handles.is_none());
    }
}
