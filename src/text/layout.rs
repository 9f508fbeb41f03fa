// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text laid out along a `CurvePath`.
//!
//! Character offsets map to arc lengths by measuring the prefix before
//! them. This ignores shaping across the boundary (ligatures, kerning
//! into the next glyph), so caret positions are an approximation.

use super::buffer::{byte_index, char_boundaries, utf16_len};
use super::measure::{MeasureError, TextMeasure};
use crate::path::CurvePath;
use kurbo::{Point, Vec2};

/// Slack allowed when comparing a measured width to the path length
const LENGTH_TOLERANCE: f64 = 1e-9;

/// Where one character is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    /// UTF-16 offset of the character
    pub offset: usize,
    pub ch: char,
    /// Left end of the glyph's baseline segment
    pub origin: Point,
    /// Rotation of the glyph, radians
    pub angle: f64,
    pub advance: f64,
}

/// A borrowed view of text flowing along a curve.
#[derive(Debug, Clone, Copy)]
pub struct TextOnPath<'a> {
    path: &'a CurvePath,
    measure: &'a dyn TextMeasure,
    text: &'a str,
}

impl<'a> TextOnPath<'a> {
    pub fn new(path: &'a CurvePath, measure: &'a dyn TextMeasure, text: &'a str) -> Self {
        Self {
            path,
            measure,
            text,
        }
    }

    pub fn path(&self) -> &'a CurvePath {
        self.path
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Arc length covered by the text before `offset`.
    ///
    /// Offset 0 is answered without measuring: the measurement primitive
    /// rejects empty ranges. Fails when the prefix does not fit on the
    /// path, since unrendered characters have no position.
    pub fn substring_length(&self, offset: usize) -> Result<f64, MeasureError> {
        if offset == 0 {
            return Ok(0.0);
        }
        let len = utf16_len(self.text);
        if offset > len {
            return Err(MeasureError::OffsetOutOfRange { offset, len });
        }
        let prefix = &self.text[..byte_index(self.text, offset)];
        if prefix.is_empty() {
            // Offset inside the first character's surrogate pair
            return Ok(0.0);
        }
        let needed = self.measure.measure(prefix)?;
        let available = self.path.true_length();
        if needed > available + LENGTH_TOLERANCE {
            return Err(MeasureError::NotOnPath { needed, available });
        }
        Ok(needed)
    }

    /// Like `substring_length`, but positions past the end of the path
    /// clamp to the end instead of failing.
    pub fn substring_length_clamped(&self, offset: usize) -> f64 {
        match self.substring_length(offset) {
            Ok(len) => len,
            Err(MeasureError::NotOnPath { available, .. }) => available,
            Err(err) => {
                tracing::debug!("Clamping unmeasurable offset {}: {}", offset, err);
                self.path.true_length()
            }
        }
    }

    /// Width of the whole text, or 0 when empty.
    pub fn text_length(&self) -> Result<f64, MeasureError> {
        if self.text.is_empty() {
            return Ok(0.0);
        }
        self.measure.measure(self.text)
    }

    /// Point on the curve where the caret for `offset` sits.
    pub fn point_for_offset(&self, offset: usize) -> Point {
        self.path.point_at(self.substring_length_clamped(offset))
    }

    /// Nearest character offset to a point in curve space.
    ///
    /// Every character boundary is projected onto the curve and the
    /// closest one wins; ties go to the lowest offset. This costs one
    /// measurement and one curve evaluation per character, which is fine
    /// for typing-scale text but does not scale to long runs.
    pub fn resolve_offset(&self, point: Point) -> usize {
        let mut closest_offset = 0;
        let mut closest_dist = f64::INFINITY;
        for offset in char_boundaries(self.text) {
            let len = match self.substring_length(offset) {
                Ok(len) => len,
                // Everything after this is not on the path either
                Err(_) => break,
            };
            let dist = (self.path.point_at(len) - point).hypot();
            if dist < closest_dist {
                closest_dist = dist;
                closest_offset = offset;
            }
        }
        closest_offset
    }

    /// Whether `point` lies on the drawn stroke.
    pub fn is_point_on_path(&self, point: Point, stroke_width: f64) -> bool {
        self.path.contains_in_stroke(point, stroke_width)
    }

    /// Position and rotation of every character that fits on the path.
    ///
    /// Each glyph is centered on the curve at the midpoint of its advance
    /// and rotated to the tangent there. Characters whose midpoint falls
    /// past the end of the path are not placed.
    pub fn glyph_placements(&self) -> Vec<GlyphPlacement> {
        let mut placements = Vec::new();
        let true_length = self.path.true_length();
        let mut start = 0.0;
        let mut offset = 0;
        let mut byte_end = 0;
        for ch in self.text.chars() {
            byte_end += ch.len_utf8();
            let end = match self.measure.measure(&self.text[..byte_end]) {
                Ok(end) => end,
                Err(err) => {
                    tracing::debug!("Stopping glyph placement at {}: {}", offset, err);
                    break;
                }
            };
            let advance = (end - start).max(0.0);
            let mid = start + advance / 2.0;
            if mid > true_length {
                break;
            }
            let center = self.path.point_at(mid);
            let angle = self.path.tangent_angle_at(mid);
            let half = Vec2::from_angle(angle) * (advance / 2.0);
            placements.push(GlyphPlacement {
                offset,
                ch,
                origin: center - half,
                angle,
                advance,
            });
            offset += ch.len_utf16();
            start = end;
        }
        placements
    }
}
