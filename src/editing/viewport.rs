// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Screen to curve space transform

use kurbo::{Affine, Point, Vec2};

/// Maps curve space (where grid cells and paths live) to screen space.
///
/// `screen = local * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    pub offset: Vec2,
    pub zoom: f64,
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort {
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    pub fn with_zoom(offset: Vec2, zoom: f64) -> Self {
        Self { offset, zoom }
    }

    /// Local to screen transform
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    pub fn to_screen(&self, local: Point) -> Point {
        self.affine() * local
    }

    /// Inverse of `to_screen`: where a pointer lands in curve space.
    pub fn screen_to_local(&self, screen: Point) -> Point {
        self.affine().inverse() * screen
    }
}
