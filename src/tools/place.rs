// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Place tool: press on an empty cell to start a text item, drag to lay
//! out its trail. Pressing on the last cell of an existing item continues
//! that item's trail instead.

use crate::editing::{Drag, MouseDelegate, MouseEvent};
use crate::grid::{CellStep, GridCell, GridOccupancy};
use crate::model::{Document, ItemId};
use crate::paint;
use crate::tools::{Tool, ToolId};
use kurbo::{Affine, Vec2};
use masonry::vello::Scene;

/// A trail being laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    id: ItemId,
    /// Trail length when the gesture started, restored on cancel
    start_len: usize,
}

/// The text placement tool
#[derive(Debug, Clone, Default)]
pub struct PlaceTextTool {
    placing: Option<Placement>,
}

impl PlaceTextTool {
    /// Item currently being placed, if any.
    pub fn placing(&self) -> Option<ItemId> {
        self.placing.map(|p| p.id)
    }

    /// Append free cells one step at a time from the trail's end toward
    /// `target`, stopping at the first blocked cell.
    fn extend_toward(&self, target: GridCell, doc: &mut Document) {
        let Some(placement) = self.placing else {
            return;
        };
        let Some((field, grid)) = doc.text_field_mut_with_grid(placement.id) else {
            return;
        };
        while let Some(&last) = field.trail().last() {
            if last == target {
                break;
            }
            let step = if last.x != target.x {
                CellStep::new(target.x.cmp(&last.x) as i32, 0)
            } else {
                CellStep::new(0, target.y.cmp(&last.y) as i32)
            };
            let next = last.offset(step);
            if grid.is_cell_occupied(next) || !field.append_grid_cell(next, grid) {
                break;
            }
        }
    }
}

impl Tool for PlaceTextTool {
    fn id(&self) -> ToolId {
        ToolId::PlaceText
    }

    fn paint(&mut self, scene: &mut Scene, doc: &Document, transform: &Affine) {
        let Some(field) = self.placing.and_then(|p| doc.text_field(p.id)) else {
            return;
        };
        let (cw, ch) = doc.settings().cell_size;
        paint::paint_cells(
            scene,
            field.trail().iter().copied(),
            Vec2::new(cw, ch),
            *transform,
        );
    }
}

impl MouseDelegate for PlaceTextTool {
    type Data = Document;

    fn left_down(&mut self, event: MouseEvent, doc: &mut Document) {
        let cell = doc.cell_at(event.pos);
        let existing = doc
            .text_fields()
            .find(|field| field.trail().last() == Some(&cell))
            .map(|field| (field.id(), field.trail().len()));

        self.placing = match existing {
            Some((id, start_len)) => {
                tracing::debug!("Continuing {} from {:?}", id, cell);
                Some(Placement { id, start_len })
            }
            None => doc
                .place_text_item(cell)
                .map(|id| Placement { id, start_len: 1 }),
        };
    }

    fn left_drag_changed(&mut self, _event: MouseEvent, drag: Drag, doc: &mut Document) {
        let target = doc.cell_at(drag.current);
        self.extend_toward(target, doc);
    }

    fn left_up(&mut self, _event: MouseEvent, doc: &mut Document) {
        if let Some(placement) = self.placing.take() {
            doc.focus(placement.id);
        }
    }

    fn cancel(&mut self, doc: &mut Document) {
        let Some(placement) = self.placing.take() else {
            return;
        };
        if let Some((field, grid)) = doc.text_field_mut_with_grid(placement.id) {
            field.truncate_trail(placement.start_len, grid);
            tracing::debug!("Placement of {} cancelled", placement.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Mouse;
    use kurbo::Point;

    fn at(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, y))
    }

    #[test]
    fn click_places_and_focuses() {
        let mut doc = Document::default();
        let mut tool = PlaceTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(25.0, 25.0), &mut tool, &mut doc);
        let id = tool.placing().unwrap();
        mouse.mouse_up(at(25.0, 25.0), &mut tool, &mut doc);

        assert_eq!(doc.focused_field(), Some(id));
        assert_eq!(doc.text_field(id).unwrap().trail(), &[GridCell::new(2, 2)]);
        assert!(tool.placing().is_none());
    }

    #[test]
    fn drag_lays_out_trail() {
        let mut doc = Document::default();
        let mut tool = PlaceTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(25.0, 25.0), &mut tool, &mut doc);
        let id = tool.placing().unwrap();
        mouse.mouse_moved(at(45.0, 25.0), &mut tool, &mut doc);
        mouse.mouse_moved(at(45.0, 45.0), &mut tool, &mut doc);
        mouse.mouse_up(at(45.0, 45.0), &mut tool, &mut doc);

        let field = doc.text_field(id).unwrap();
        assert_eq!(
            field.trail(),
            &[
                GridCell::new(2, 2),
                GridCell::new(3, 2),
                GridCell::new(4, 2),
                GridCell::new(4, 3),
                GridCell::new(4, 4)
            ]
        );
        for &cell in field.trail() {
            assert_eq!(doc.grid().owner(cell), Some(id));
        }
    }

    #[test]
    fn drag_stops_at_occupied_cell() {
        let mut doc = Document::default();
        doc.place_image_item(GridCell::new(4, 2), 1, 1).unwrap();
        let mut tool = PlaceTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(25.0, 25.0), &mut tool, &mut doc);
        let id = tool.placing().unwrap();
        mouse.mouse_moved(at(55.0, 25.0), &mut tool, &mut doc);
        mouse.mouse_up(at(55.0, 25.0), &mut tool, &mut doc);

        let trail = doc.text_field(id).unwrap().trail().to_vec();
        assert_eq!(trail, vec![GridCell::new(2, 2), GridCell::new(3, 2)]);
    }

    #[test]
    fn cancel_restores_trail() {
        let mut doc = Document::default();
        let mut tool = PlaceTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(25.0, 25.0), &mut tool, &mut doc);
        let id = tool.placing().unwrap();
        mouse.mouse_moved(at(55.0, 25.0), &mut tool, &mut doc);
        assert_eq!(doc.text_field(id).unwrap().trail().len(), 4);
        mouse.cancel(&mut tool, &mut doc);

        assert_eq!(doc.text_field(id).unwrap().trail(), &[GridCell::new(2, 2)]);
        assert!(!doc.grid().is_cell_occupied(GridCell::new(3, 2)));
        assert_eq!(doc.focused_field(), None);
    }

    #[test]
    fn press_on_trail_end_continues_item() {
        let mut doc = Document::default();
        let mut tool = PlaceTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(25.0, 25.0), &mut tool, &mut doc);
        let id = tool.placing().unwrap();
        mouse.mouse_moved(at(35.0, 25.0), &mut tool, &mut doc);
        mouse.mouse_up(at(35.0, 25.0), &mut tool, &mut doc);

        mouse.mouse_down(at(35.0, 25.0), &mut tool, &mut doc);
        assert_eq!(tool.placing(), Some(id));
        mouse.mouse_moved(at(35.0, 45.0), &mut tool, &mut doc);
        mouse.cancel(&mut tool, &mut doc);
        assert_eq!(doc.text_field(id).unwrap().trail().len(), 2);
    }

    #[test]
    fn press_on_occupied_cell_places_nothing() {
        let mut doc = Document::default();
        doc.place_image_item(GridCell::new(2, 2), 1, 1).unwrap();
        let mut tool = PlaceTextTool::default();
        let mut mouse = Mouse::new();
        mouse.mouse_down(at(25.0, 25.0), &mut tool, &mut doc);
        assert!(tool.placing().is_none());
        assert_eq!(doc.text_fields().count(), 0);
    }
}
