// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text measurement backends.
//!
//! The curved text core never talks to a font system directly; it asks a
//! [`TextMeasure`] for advance widths. `MonospaceMeasure` is deterministic
//! and used for the overlay input mirror and in tests. `ParleyMeasure`
//! shapes with parley for real fonts.

use parley::{FontContext, FontFamily, FontStack, GenericFamily, LayoutContext, StyleProperty};
use std::cell::RefCell;
use std::fmt;
use thiserror::Error;

/// Failures when measuring text or mapping it onto a path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// Measuring a zero-length substring is rejected by the platform
    /// primitive; callers short-circuit offset 0 instead.
    #[error("cannot measure an empty substring")]
    EmptyRange,

    #[error("offset {offset} is past the end of the text (length {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// The measured prefix runs past the end of the laid out path.
    #[error("text needs {needed:.2} units of path but only {available:.2} exist")]
    NotOnPath { needed: f64, available: f64 },
}

/// Something that can report the advance width of a run of text.
pub trait TextMeasure: fmt::Debug {
    /// Advance width of `text`.
    ///
    /// Implementations may reject empty input with
    /// [`MeasureError::EmptyRange`], like the platform call they stand in
    /// for.
    fn measure(&self, text: &str) -> Result<f64, MeasureError>;

    /// Height of one line of text.
    fn line_height(&self) -> f64;
}

/// Fixed advance per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub font_size: f64,
    /// Advance of one character as a fraction of the font size
    pub advance_ratio: f64,
}

impl MonospaceMeasure {
    /// Typical advance of a monospace face: 0.6 em
    pub const DEFAULT_ADVANCE_RATIO: f64 = 0.6;

    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            advance_ratio: Self::DEFAULT_ADVANCE_RATIO,
        }
    }

    pub fn advance(&self) -> f64 {
        self.font_size * self.advance_ratio
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Result<f64, MeasureError> {
        if text.is_empty() {
            return Err(MeasureError::EmptyRange);
        }
        Ok(text.chars().count() as f64 * self.advance())
    }

    fn line_height(&self) -> f64 {
        self.font_size * 1.2
    }
}

/// Shapes text with parley to measure it.
pub struct ParleyMeasure {
    font_size: f32,
    family: GenericFamily,
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<LayoutContext<[u8; 4]>>,
}

impl ParleyMeasure {
    pub fn new(font_size: f64, family: GenericFamily) -> Self {
        Self {
            font_size: font_size as f32,
            family,
            font_cx: RefCell::new(FontContext::default()),
            layout_cx: RefCell::new(LayoutContext::new()),
        }
    }

    /// Monospace face, matching the overlay input's styling.
    pub fn monospace(font_size: f64) -> Self {
        Self::new(font_size, GenericFamily::Monospace)
    }
}

impl fmt::Debug for ParleyMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyMeasure")
            .field("font_size", &self.font_size)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure(&self, text: &str) -> Result<f64, MeasureError> {
        if text.is_empty() {
            return Err(MeasureError::EmptyRange);
        }
        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(self.font_size));
        builder.push_default(StyleProperty::FontStack(FontStack::Single(
            FontFamily::Generic(self.family),
        )));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);

        // Full width keeps trailing spaces, which matter for `white-space: pre`
        Ok(layout.full_width() as f64)
    }

    fn line_height(&self) -> f64 {
        self.font_size as f64 * 1.2
    }
}
