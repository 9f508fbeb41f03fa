// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Things placed on the grid.

use super::ItemId;
use crate::editing::CurvedTextField;
use crate::grid::GridCell;

/// An item in the document
#[derive(Debug)]
pub enum Item {
    /// Text winding along a trail of cells
    Text(CurvedTextField),
    /// Image covering a rectangle of cells
    Image(ImageItem),
}

impl Item {
    pub fn id(&self) -> ItemId {
        match self {
            Item::Text(field) => field.id(),
            Item::Image(image) => image.id,
        }
    }

    /// Every cell this item covers
    pub fn occupied_cells(&self) -> Vec<GridCell> {
        match self {
            Item::Text(field) => field.trail().to_vec(),
            Item::Image(image) => image.grid_positions().collect(),
        }
    }

    pub fn as_text(&self) -> Option<&CurvedTextField> {
        match self {
            Item::Text(field) => Some(field),
            Item::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut CurvedTextField> {
        match self {
            Item::Text(field) => Some(field),
            Item::Image(_) => None,
        }
    }
}

/// A rectangular block of cells reserved for an image.
///
/// Loading and drawing the image itself is up to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub id: ItemId,
    /// Top-left cell
    pub origin: GridCell,
    pub columns: i32,
    pub rows: i32,
}

impl ImageItem {
    pub fn new(id: ItemId, origin: GridCell, columns: i32, rows: i32) -> Self {
        Self {
            id,
            origin,
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    /// Covered cells in row-major order.
    ///
    /// A block reaching past the end of the coordinate range is cut off there.
    pub fn grid_positions(&self) -> impl Iterator<Item = GridCell> + '_ {
        let bottom = self.origin.y.saturating_add(self.rows);
        let right = self.origin.x.saturating_add(self.columns);
        (self.origin.y..bottom)
            .flat_map(move |y| (self.origin.x..right).map(move |x| GridCell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_covers_rectangle_row_major() {
        let image = ImageItem::new(ItemId::next(), GridCell::new(1, 2), 2, 2);
        let cells: Vec<_> = image.grid_positions().collect();
        assert_eq!(
            cells,
            vec![
                GridCell::new(1, 2),
                GridCell::new(2, 2),
                GridCell::new(1, 3),
                GridCell::new(2, 3)
            ]
        );
        assert_eq!(Item::Image(image).occupied_cells().len(), 4);
    }

    #[test]
    fn image_at_coordinate_limit_is_cut_off() {
        let origin = GridCell::new(i32::MAX - 1, i32::MAX - 1);
        let image = ImageItem::new(ItemId::next(), origin, 5, 5);
        let cells: Vec<_> = image.grid_positions().collect();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0], origin);
    }

    #[test]
    fn empty_image_still_covers_one_cell() {
        let image = ImageItem::new(ItemId::next(), GridCell::new(0, 0), 0, 0);
        assert_eq!(image.grid_positions().count(), 1);
    }
}
