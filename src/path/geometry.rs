// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arc length parametrization of a path with a hidden tail.

use crate::settings;
use kurbo::{BezPath, ParamCurve, ParamCurveArclen, ParamCurveNearest, PathEl, PathSeg, Point};

/// How much of a path is drawn and how much only exists for measuring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualTruncation {
    /// Length drawn from the start of the path
    pub visible_length: f64,
    /// Length past `visible_length` that is hidden but measurable
    pub reserve_length: f64,
}

/// A 2D curve navigable by arc length.
///
/// Invariant: `ends` is non-decreasing and has one entry per segment.
#[derive(Debug, Clone)]
pub struct CurvePath {
    bez: BezPath,
    segments: Vec<PathSeg>,
    /// Cumulative arc length at the end of each segment
    ends: Vec<f64>,
    cutoff: f64,
    tangent_epsilon: f64,
}

impl Default for CurvePath {
    fn default() -> Self {
        Self::new()
    }
}

impl CurvePath {
    /// An empty path.
    pub fn new() -> Self {
        Self {
            bez: BezPath::new(),
            segments: Vec::new(),
            ends: Vec::new(),
            cutoff: 0.0,
            tangent_epsilon: settings::field::TANGENT_EPSILON,
        }
    }

    pub fn with_tangent_epsilon(mut self, epsilon: f64) -> Self {
        self.tangent_epsilon = epsilon;
        self
    }

    /// Replace the path.
    ///
    /// When `cutoff > 0`, the last `cutoff` of the path's length is not
    /// drawn but still answers `point_at` queries, so text measured past
    /// the visible end keeps a position.
    pub fn set_path(&mut self, bez: BezPath, cutoff: f64) {
        let segments: Vec<PathSeg> = bez.segments().collect();
        let mut ends = Vec::with_capacity(segments.len());
        let mut acc = 0.0;
        for seg in &segments {
            acc += seg.arclen(settings::field::ARCLEN_ACCURACY);
            ends.push(acc);
        }
        self.bez = bez;
        self.segments = segments;
        self.ends = ends;
        self.cutoff = cutoff.clamp(0.0, acc);
        tracing::debug!(
            "CurvePath: {} segments, length {:.3}, cutoff {:.3}",
            self.segments.len(),
            acc,
            self.cutoff
        );
    }

    pub fn bez(&self) -> &BezPath {
        &self.bez
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Full measurable length, including the hidden tail.
    pub fn true_length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Drawn length, excluding the hidden tail.
    pub fn total_length(&self) -> f64 {
        (self.true_length() - self.cutoff).max(0.0)
    }

    pub fn truncation(&self) -> VisualTruncation {
        VisualTruncation {
            visible_length: self.total_length(),
            reserve_length: self.cutoff,
        }
    }

    /// Point at arc length `length`, clamped to the path.
    pub fn point_at(&self, length: f64) -> Point {
        let Some(last) = self.segments.len().checked_sub(1) else {
            return self.start_point();
        };
        let length = length.clamp(0.0, self.true_length());
        let idx = self.ends.partition_point(|&end| end < length).min(last);
        let seg_start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let seg = self.segments[idx];
        let seg_len = self.ends[idx] - seg_start;
        if seg_len <= 0.0 {
            return seg.eval(0.0);
        }
        let t = seg.inv_arclen(length - seg_start, settings::field::ARCLEN_ACCURACY);
        seg.eval(t)
    }

    /// Direction of travel at arc length `length`, in radians.
    ///
    /// Estimated from two samples `epsilon` apart, so it is only
    /// approximate near sharp turns. At the start the backward sample is
    /// clamped to zero; at the end the forward sample clamps to the end.
    pub fn tangent_angle_at(&self, length: f64) -> f64 {
        let before = self.point_at((length - self.tangent_epsilon).max(0.0));
        let after = self.point_at(length + self.tangent_epsilon);
        (after.y - before.y).atan2(after.x - before.x)
    }

    /// Hit test against the drawn stroke of the given width.
    pub fn contains_in_stroke(&self, point: Point, stroke_width: f64) -> bool {
        let half = stroke_width / 2.0;
        let max_dist_sq = half * half;
        let visible = self.total_length();
        let mut seg_start = 0.0;
        for (seg, &seg_end) in self.segments.iter().zip(&self.ends) {
            if seg_start >= visible {
                break;
            }
            let seg = if seg_end > visible {
                // Only the drawn part of a segment straddling the cutoff
                let t = seg.inv_arclen(visible - seg_start, settings::field::ARCLEN_ACCURACY);
                seg.subsegment(0.0..t)
            } else {
                *seg
            };
            let nearest = seg.nearest(point, settings::field::ARCLEN_ACCURACY);
            if nearest.distance_sq <= max_dist_sq {
                return true;
            }
            seg_start = seg_end;
        }
        false
    }

    fn start_point(&self) -> Point {
        match self.bez.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => Point::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-6;

    fn straight(len: f64) -> CurvePath {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((len, 0.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 0.0);
        path
    }

    fn elbow() -> CurvePath {
        // Right 10, then down 10
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((10.0, 0.0));
        bez.line_to((10.0, 10.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 0.0);
        path
    }

    #[test]
    fn empty_path_has_zero_length() {
        let path = CurvePath::new();
        assert!(path.is_empty());
        assert_eq!(path.total_length(), 0.0);
        assert_eq!(path.point_at(5.0), Point::ZERO);
        assert_eq!(path.tangent_angle_at(0.0), 0.0);
    }

    #[test]
    fn point_at_walks_segments() {
        let path = elbow();
        assert!((path.true_length() - 20.0).abs() < EPS);
        let p = path.point_at(5.0);
        assert!((p.x - 5.0).abs() < EPS && p.y.abs() < EPS);
        let p = path.point_at(15.0);
        assert!((p.x - 10.0).abs() < EPS && (p.y - 5.0).abs() < EPS);
    }

    #[test]
    fn point_at_clamps_out_of_range() {
        let path = straight(10.0);
        assert_eq!(path.point_at(-3.0), Point::new(0.0, 0.0));
        let end = path.point_at(99.0);
        assert!((end.x - 10.0).abs() < EPS);
    }

    #[test]
    fn tangent_follows_direction() {
        let path = elbow();
        assert!(path.tangent_angle_at(5.0).abs() < 1e-6);
        assert!((path.tangent_angle_at(15.0) - FRAC_PI_2).abs() < 1e-6);
        // Start and end stay finite thanks to clamping
        assert!(path.tangent_angle_at(0.0).abs() < 1e-6);
        assert!((path.tangent_angle_at(20.0) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn cutoff_hides_tail_but_keeps_it_measurable() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((30.0, 0.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 10.0);

        assert!((path.true_length() - 30.0).abs() < EPS);
        assert!((path.total_length() - 20.0).abs() < EPS);
        let trunc = path.truncation();
        assert!((trunc.visible_length - 20.0).abs() < EPS);
        assert!((trunc.reserve_length - 10.0).abs() < EPS);

        let p = path.point_at(25.0);
        assert!((p.x - 25.0).abs() < EPS);
    }

    #[test]
    fn cutoff_is_clamped_to_length() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((5.0, 0.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 50.0);
        assert_eq!(path.total_length(), 0.0);
    }

    #[test]
    fn arc_length_is_monotonic_along_a_curve() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.quad_to((10.0, 20.0), (20.0, 0.0));
        bez.quad_to((30.0, -20.0), (40.0, 0.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 0.0);
        let mut prev_x = f64::NEG_INFINITY;
        let steps = 20;
        for i in 0..=steps {
            let p = path.point_at(path.true_length() * i as f64 / steps as f64);
            assert!(p.x >= prev_x - 1e-9);
            prev_x = p.x;
        }
    }

    #[test]
    fn stroke_hit_test_respects_width_and_cutoff() {
        let mut bez = BezPath::new();
        bez.move_to((0.0, 0.0));
        bez.line_to((30.0, 0.0));
        let mut path = CurvePath::new();
        path.set_path(bez, 10.0);

        assert!(path.contains_in_stroke(Point::new(5.0, 4.0), 9.0));
        assert!(!path.contains_in_stroke(Point::new(5.0, 5.0), 9.0));
        // Hidden tail does not take hits
        assert!(!path.contains_in_stroke(Point::new(26.0, 0.0), 9.0));
        assert!(path.contains_in_stroke(Point::new(19.0, 0.0), 9.0));
    }
}
