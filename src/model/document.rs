// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The grid document: placed items plus the occupancy map they share.

use super::ItemId;
use super::item::{ImageItem, Item};
use crate::editing::{CurvedTextField, ViewPort};
use crate::grid::{GridCell, GridOccupancy, OccupancyGrid};
use crate::settings::Settings;
use kurbo::Point;
use std::collections::BTreeMap;

/// All items on one canvas.
///
/// Items are never removed. TODO: add `remove_item`, which has to release
/// every cell from `Item::occupied_cells` and blur the item if focused.
#[derive(Debug)]
pub struct Document {
    grid: OccupancyGrid,
    items: BTreeMap<ItemId, Item>,
    settings: Settings,
    pub viewport: ViewPort,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Document {
    pub fn new(settings: Settings) -> Self {
        Self {
            grid: OccupancyGrid::from_settings(&settings),
            items: BTreeMap::new(),
            settings,
            viewport: ViewPort::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn text_field(&self, id: ItemId) -> Option<&CurvedTextField> {
        self.items.get(&id).and_then(Item::as_text)
    }

    /// A text field together with the grid it grows into.
    pub fn text_field_mut_with_grid(
        &mut self,
        id: ItemId,
    ) -> Option<(&mut CurvedTextField, &mut OccupancyGrid)> {
        let field = self.items.get_mut(&id).and_then(Item::as_text_mut)?;
        Some((field, &mut self.grid))
    }

    pub fn text_fields(&self) -> impl Iterator<Item = &CurvedTextField> {
        self.items.values().filter_map(Item::as_text)
    }

    pub fn text_fields_mut(&mut self) -> impl Iterator<Item = &mut CurvedTextField> {
        self.items.values_mut().filter_map(Item::as_text_mut)
    }

    /// Grid cell under a screen position.
    pub fn cell_at(&self, screen: Point) -> GridCell {
        let local = self.viewport.screen_to_local(screen);
        GridCell::containing(local, self.grid.cell_size())
    }

    /// Start a text item on `cell`. Returns `None` if the cell is taken.
    pub fn place_text_item(&mut self, cell: GridCell) -> Option<ItemId> {
        if self.grid.is_cell_occupied(cell) {
            tracing::debug!("Cannot place text at {:?}: occupied", cell);
            return None;
        }
        let id = ItemId::next();
        let field = CurvedTextField::new(id, cell, &self.settings, &mut self.grid);
        self.items.insert(id, Item::Text(field));
        Some(id)
    }

    /// Reserve a block of cells for an image. Returns `None` if any cell
    /// is taken.
    pub fn place_image_item(
        &mut self,
        origin: GridCell,
        columns: i32,
        rows: i32,
    ) -> Option<ItemId> {
        let image = ImageItem::new(ItemId::next(), origin, columns, rows);
        if image
            .grid_positions()
            .any(|cell| self.grid.is_cell_occupied(cell))
        {
            tracing::debug!("Cannot place image at {:?}: occupied", origin);
            return None;
        }
        for cell in image.grid_positions() {
            self.grid.set_cell_owner(cell, image.id);
        }
        let id = image.id;
        tracing::info!("Placed image {} at {:?}", id, origin);
        self.items.insert(id, Item::Image(image));
        Some(id)
    }

    /// Topmost text field under a screen position, counting its touch
    /// selection handles.
    pub fn text_field_at(&self, screen: Point) -> Option<ItemId> {
        let local = self.viewport.screen_to_local(screen);
        self.items
            .values()
            .rev()
            .filter_map(Item::as_text)
            .find(|field| field.handle_at(local).is_some() || field.contains(local))
            .map(CurvedTextField::id)
    }

    pub fn focused_field(&self) -> Option<ItemId> {
        self.text_fields()
            .find(|field| field.is_focused())
            .map(CurvedTextField::id)
    }

    /// Focus one text field, blurring every other.
    pub fn focus(&mut self, id: ItemId) {
        for (item_id, item) in self.items.iter_mut() {
            if let Some(field) = item.as_text_mut() {
                if *item_id == id {
                    field.focus();
                } else {
                    field.blur();
                }
            }
        }
    }

    pub fn blur_all(&mut self) {
        for field in self.items.values_mut().filter_map(Item::as_text_mut) {
            field.blur();
        }
    }

    /// Type into the focused field, if any.
    pub fn type_text(&mut self, text: &str) {
        if let Some(id) = self.focused_field()
            && let Some((field, grid)) = self.text_field_mut_with_grid(id)
        {
            field.type_text(text, grid);
        }
    }

    /// Advance caret blink timers. Returns true if anything needs repainting.
    pub fn tick(&mut self, delta_time: f64) -> bool {
        let mut changed = false;
        for field in self.items.values_mut().filter_map(Item::as_text_mut) {
            changed |= field.tick(delta_time);
        }
        changed
    }
}
