// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Growing a text item's trail one grid cell at a time.
//!
//! When typed text no longer fits on the visible path, the trail is
//! extended in its current travel direction. A blocked cell is routed
//! around by trying a counter-clockwise turn, then a clockwise one. If all
//! three are taken the item stops growing and the text overflows.

use crate::grid::{CellStep, GridCell, GridOccupancy};
use crate::model::ItemId;
use crate::path::{CurvePath, project_trail};
use thiserror::Error;

/// Slack when comparing text length to path length
const FIT_TOLERANCE: f64 = 1e-9;

/// Why growth stopped before the text fit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrowthError {
    /// Straight ahead and both turns are occupied.
    #[error("no free cell to grow into after {last:?}")]
    Exhausted { last: GridCell },

    /// The candidate would not move the path forward.
    #[error("growth from {cell:?} does not lengthen the path")]
    Degenerate { cell: GridCell },

    #[error("cannot grow an empty trail")]
    EmptyTrail,
}

/// The cell the trail would grow into next.
///
/// A single-cell trail grows toward +x; a longer one keeps the direction
/// of its last step. Occupied candidates fall back to the CCW turn, then
/// the CW turn.
pub fn next_cell(trail: &[GridCell], grid: &dyn GridOccupancy) -> Result<GridCell, GrowthError> {
    let (&last, rest) = trail.split_last().ok_or(GrowthError::EmptyTrail)?;
    let direction = match rest.last() {
        Some(&second_last) => last.step_from(second_last),
        None => CellStep::RIGHT,
    };
    if direction.is_zero() {
        return Err(GrowthError::Degenerate { cell: last });
    }

    [direction, direction.rotate_ccw(), direction.rotate_cw()]
        .into_iter()
        .map(|step| last.offset(step))
        .find(|&cell| !grid.is_cell_occupied(cell))
        .ok_or(GrowthError::Exhausted { last })
}

/// Extend `trail` until text of `text_length` fits on the visible part of
/// `path`, claiming each new cell for `owner` as it is appended.
///
/// Returns the number of cells added. On error the cells appended so far
/// stay in place and keep their owner.
pub fn grow_to_fit(
    trail: &mut Vec<GridCell>,
    path: &mut CurvePath,
    text_length: f64,
    owner: ItemId,
    grid: &mut dyn GridOccupancy,
) -> Result<usize, GrowthError> {
    let mut added = 0;
    while text_length > path.total_length() + FIT_TOLERANCE {
        let cell = next_cell(trail, grid)?;
        if trail.last() == Some(&cell) {
            return Err(GrowthError::Degenerate { cell });
        }

        let before = path.total_length();
        trail.push(cell);
        grid.set_cell_owner(cell, owner);
        let curve = project_trail(trail, grid.cell_size());
        path.set_path(curve.bez, curve.reserve);
        added += 1;

        tracing::debug!(
            "Grew {} into {:?}: visible length {:.3} -> {:.3}",
            owner,
            cell,
            before,
            path.total_length()
        );
        if path.total_length() <= before {
            return Err(GrowthError::Degenerate { cell });
        }
    }
    if added > 0 {
        tracing::info!("{} grew by {} cell(s) to {}", owner, added, trail.len());
    }
    Ok(added)
}
