// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Cell ownership registry.

use super::GridCell;
use crate::model::ItemId;
use kurbo::Vec2;
use std::collections::HashMap;

/// What the curved text core needs from the document's occupancy map.
///
/// Items call `set_cell_owner` as soon as they append a cell to their
/// trail, before the next `is_cell_occupied` query, so two items can never
/// claim the same cell.
pub trait GridOccupancy {
    fn is_cell_occupied(&self, cell: GridCell) -> bool;

    fn set_cell_owner(&mut self, cell: GridCell, owner: ItemId);

    fn clear_cell_owner(&mut self, cell: GridCell);

    /// Grid-to-curve-space scale factor.
    fn cell_size(&self) -> Vec2;
}

/// Hash map backed occupancy with optional bounds.
///
/// Cells outside the bounds report as occupied, so nothing grows off the
/// edge of the canvas.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    owners: HashMap<GridCell, ItemId>,
    cell_size: Vec2,
    /// Number of columns and rows; `None` for an unbounded grid
    bounds: Option<(i32, i32)>,
}

impl OccupancyGrid {
    /// An unbounded grid.
    pub fn new(cell_size: Vec2) -> Self {
        Self {
            owners: HashMap::new(),
            cell_size,
            bounds: None,
        }
    }

    /// A grid with `columns` x `rows` cells starting at (0, 0).
    pub fn with_bounds(cell_size: Vec2, columns: i32, rows: i32) -> Self {
        Self {
            owners: HashMap::new(),
            cell_size,
            bounds: Some((columns, rows)),
        }
    }

    pub fn from_settings(settings: &crate::settings::Settings) -> Self {
        let (cx, cy) = settings.cell_size;
        let (columns, rows) = settings.grid_size;
        Self::with_bounds(Vec2::new(cx, cy), columns, rows)
    }

    pub fn in_bounds(&self, cell: GridCell) -> bool {
        match self.bounds {
            Some((columns, rows)) => cell.x >= 0 && cell.y >= 0 && cell.x < columns && cell.y < rows,
            None => true,
        }
    }

    pub fn owner(&self, cell: GridCell) -> Option<ItemId> {
        self.owners.get(&cell).copied()
    }

    /// All cells owned by `owner`, in no particular order.
    pub fn cells_owned_by(&self, owner: ItemId) -> Vec<GridCell> {
        self.owners
            .iter()
            .filter(|(_, id)| **id == owner)
            .map(|(cell, _)| *cell)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.owners.len()
    }
}

impl GridOccupancy for OccupancyGrid {
    fn is_cell_occupied(&self, cell: GridCell) -> bool {
        !self.in_bounds(cell) || self.owners.contains_key(&cell)
    }

    fn set_cell_owner(&mut self, cell: GridCell, owner: ItemId) {
        if let Some(previous) = self.owners.insert(cell, owner)
            && previous != owner
        {
            tracing::warn!("Cell {:?} taken over from {} by {}", cell, previous, owner);
        }
    }

    fn clear_cell_owner(&mut self, cell: GridCell) {
        self.owners.remove(&cell);
    }

    fn cell_size(&self) -> Vec2 {
        self.cell_size
    }
}
