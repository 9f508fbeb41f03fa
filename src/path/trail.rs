// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Projection of a grid cell trail onto a smooth curve.
//!
//! Each cell contributes one quadratic running from the midpoint with its
//! previous neighbour to the midpoint with its next neighbour, using the
//! cell center as control point. The two ends of the trail get virtual
//! neighbours by linear extrapolation (a lone cell gets horizontal ones).
//! A straight tail one cell step long continues past the last cell; its
//! length is reported as the reserve to hide with `CurvePath::set_path`.

use crate::grid::GridCell;
use kurbo::{BezPath, Point, Vec2};

/// Result of projecting a trail.
#[derive(Debug, Clone)]
pub struct TrailCurve {
    pub bez: BezPath,
    /// Length of the trailing straight segment, to be hidden when drawn
    pub reserve: f64,
}

/// Build the curve through a trail of cells.
///
/// An empty trail yields an empty path with no reserve.
pub fn project_trail(trail: &[GridCell], cell_size: Vec2) -> TrailCurve {
    let centers: Vec<Point> = trail.iter().map(|cell| cell.center(cell_size)).collect();
    let mut bez = BezPath::new();
    let Some(&last_center) = centers.last() else {
        return TrailCurve { bez, reserve: 0.0 };
    };

    let mut exit = last_center;
    let mut exit_dir = Vec2::new(cell_size.x, 0.0);
    for (i, &pos) in centers.iter().enumerate() {
        let (prev, next) = neighbours(&centers, i, cell_size);
        let start = prev.midpoint(pos);
        let end = pos.midpoint(next);
        if i == 0 {
            bez.move_to(start);
        }
        bez.quad_to(pos, end);
        exit = end;
        exit_dir = next - pos;
    }

    let tail = exit + exit_dir;
    bez.line_to(tail);
    TrailCurve {
        bez,
        reserve: exit_dir.hypot(),
    }
}

/// Previous and next positions around `centers[i]`, extrapolating past
/// the ends of the trail.
fn neighbours(centers: &[Point], i: usize, cell_size: Vec2) -> (Point, Point) {
    let pos = centers[i];
    let n = centers.len();
    if n == 1 {
        let half_turn = Vec2::new(cell_size.x, 0.0);
        return (pos - half_turn, pos + half_turn);
    }
    let prev = if i > 0 {
        centers[i - 1]
    } else {
        pos + (pos - centers[1])
    };
    let next = if i + 1 < n {
        centers[i + 1]
    } else {
        pos + (pos - centers[n - 2])
    };
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CurvePath;
    use kurbo::PathEl;

    const CELL: Vec2 = Vec2::new(10.0, 10.0);

    fn curve(trail: &[GridCell]) -> CurvePath {
        let projected = project_trail(trail, CELL);
        let mut path = CurvePath::new();
        path.set_path(projected.bez, projected.reserve);
        path
    }

    #[test]
    fn empty_trail_is_empty_path() {
        let projected = project_trail(&[], CELL);
        assert!(projected.bez.elements().is_empty());
        assert_eq!(projected.reserve, 0.0);
    }

    #[test]
    fn single_cell_is_horizontal() {
        let projected = project_trail(&[GridCell::new(2, 2)], CELL);
        let els = projected.bez.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(20.0, 25.0)));
        assert_eq!(
            els[1],
            PathEl::QuadTo(Point::new(25.0, 25.0), Point::new(30.0, 25.0))
        );
        assert_eq!(els[2], PathEl::LineTo(Point::new(40.0, 25.0)));
        assert_eq!(projected.reserve, 10.0);
    }

    #[test]
    fn single_cell_visible_length_is_one_cell() {
        let path = curve(&[GridCell::new(2, 2)]);
        assert!((path.total_length() - 10.0).abs() < 1e-6);
        assert!((path.true_length() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn straight_trail_adds_one_cell_per_cell() {
        let trail: Vec<GridCell> = (2..6).map(|x| GridCell::new(x, 2)).collect();
        let path = curve(&trail);
        assert!((path.total_length() - 40.0).abs() < 1e-6);
    }

    #[test]
    fn vertical_trail_extrapolates_vertically() {
        let trail = [GridCell::new(2, 2), GridCell::new(2, 1)];
        let projected = project_trail(&trail, CELL);
        let els = projected.bez.elements();
        // Virtual previous neighbour lies below the first cell
        assert_eq!(els[0], PathEl::MoveTo(Point::new(25.0, 30.0)));
        // Tail keeps heading up
        assert_eq!(*els.last().unwrap(), PathEl::LineTo(Point::new(25.0, 0.0)));
    }

    #[test]
    fn turn_is_shorter_than_straight() {
        let straight = curve(&[GridCell::new(1, 1), GridCell::new(2, 1), GridCell::new(3, 1)]);
        let turned = curve(&[GridCell::new(1, 1), GridCell::new(2, 1), GridCell::new(2, 0)]);
        assert!(turned.total_length() < straight.total_length());
        assert!(turned.total_length() > 20.0);
    }
}
