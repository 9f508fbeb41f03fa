// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Background grid: integer cell coordinates and the occupancy map.
//!
//! Items are placed on a fixed grid. A curved text item owns an ordered
//! trail of cells; an image item owns a rectangular block of them. Which
//! item owns which cell is tracked by a [`GridOccupancy`] implementation
//! that lives with the host document.

mod occupancy;

pub use occupancy::{GridOccupancy, OccupancyGrid};

use kurbo::{Point, Vec2};

/// An integer cell coordinate on the background grid.
///
/// `y` grows downward, matching screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell containing a point in curve space.
    pub fn containing(point: Point, cell_size: Vec2) -> Self {
        Self {
            x: (point.x / cell_size.x).floor() as i32,
            y: (point.y / cell_size.y).floor() as i32,
        }
    }

    /// Center of this cell in curve space.
    pub fn center(self, cell_size: Vec2) -> Point {
        Point::new(
            (self.x as f64 + 0.5) * cell_size.x,
            (self.y as f64 + 0.5) * cell_size.y,
        )
    }

    /// The neighbouring cell one step away, pinned at the edge of the
    /// coordinate range.
    pub fn offset(self, step: CellStep) -> Self {
        Self {
            x: self.x.saturating_add(step.dx),
            y: self.y.saturating_add(step.dy),
        }
    }

    /// Displacement from `other` to `self`.
    pub fn step_from(self, other: GridCell) -> CellStep {
        CellStep {
            dx: self.x.saturating_sub(other.x),
            dy: self.y.saturating_sub(other.y),
        }
    }

    /// True when the two cells share an edge.
    pub fn is_adjacent(self, other: GridCell) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (1, 0) | (0, 1)
        )
    }
}

/// A displacement between grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStep {
    pub dx: i32,
    pub dy: i32,
}

impl CellStep {
    /// One cell toward +x, the direction a fresh trail grows in.
    pub const RIGHT: CellStep = CellStep { dx: 1, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Quarter turn counter-clockwise as seen on screen (y down).
    ///
    /// `RIGHT` turns to up, `(0, -1)`.
    pub fn rotate_ccw(self) -> Self {
        Self {
            dx: self.dy,
            dy: -self.dx,
        }
    }

    /// Quarter turn clockwise as seen on screen (y down).
    pub fn rotate_cw(self) -> Self {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }
}
