// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit tool: hover to line up text inputs, press to focus, drag to select.

use crate::editing::{Drag, MouseDelegate, MouseEvent};
use crate::model::{Document, ItemId};
use crate::tools::{Tool, ToolId};

/// The text editing tool
#[derive(Debug, Clone, Default)]
pub struct EditTextTool {
    /// Field taking the current press, and the pointer pressing it
    active: Option<(ItemId, u64)>,
}

impl EditTextTool {
    pub fn active(&self) -> Option<ItemId> {
        self.active.map(|(id, _)| id)
    }
}

impl Tool for EditTextTool {
    fn id(&self) -> ToolId {
        ToolId::EditText
    }
}

impl MouseDelegate for EditTextTool {
    type Data = Document;

    /// Every field tracks the pointer so its input sits under it before a
    /// press arrives.
    fn mouse_moved(&mut self, event: MouseEvent, doc: &mut Document) {
        let viewport = doc.viewport;
        for field in doc.text_fields_mut() {
            field.pointer_moved(event, &viewport);
        }
    }

    fn left_down(&mut self, event: MouseEvent, doc: &mut Document) {
        let Some(id) = doc.text_field_at(event.pos) else {
            doc.blur_all();
            return;
        };
        doc.focus(id);
        let viewport = doc.viewport;
        if let Some((field, _)) = doc.text_field_mut_with_grid(id)
            && field.pointer_down(event, &viewport)
        {
            self.active = Some((id, event.pointer_id));
        }
    }

    fn left_drag_changed(&mut self, event: MouseEvent, _drag: Drag, doc: &mut Document) {
        let Some((id, _)) = self.active else {
            return;
        };
        let viewport = doc.viewport;
        if let Some((field, _)) = doc.text_field_mut_with_grid(id) {
            field.pointer_moved(event, &viewport);
        }
    }

    fn left_up(&mut self, event: MouseEvent, doc: &mut Document) {
        if let Some((id, _)) = self.active.take()
            && let Some((field, _)) = doc.text_field_mut_with_grid(id)
        {
            field.pointer_up(event);
        }
    }

    fn cancel(&mut self, doc: &mut Document) {
        if let Some((id, pointer_id)) = self.active.take()
            && let Some((field, _)) = doc.text_field_mut_with_grid(id)
        {
            field.pointer_cancel(pointer_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{Mouse, SurrogatePlacement};
    use crate::grid::GridCell;
    use crate::text::SelectionDirection;
    use kurbo::Point;

    fn at(x: f64, y: f64) -> MouseEvent {
        MouseEvent::new(Point::new(x, y))
    }

    fn doc_with_text(text: &str) -> (Document, ItemId) {
        let mut doc = Document::default();
        let id = doc.place_text_item(GridCell::new(2, 2)).unwrap();
        doc.focus(id);
        doc.type_text(text);
        doc.blur_all();
        (doc, id)
    }

    #[test]
    fn hover_moves_only_fields_under_pointer() {
        let (mut doc, id) = doc_with_text("abc");
        let other = doc.place_text_item(GridCell::new(2, 6)).unwrap();
        let mut tool = EditTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_moved(at(26.0, 25.0), &mut tool, &mut doc);
        let placement = doc.text_field(id).unwrap().surrogate().placement();
        assert!(matches!(placement, SurrogatePlacement::At { .. }));
        let placement = doc.text_field(other).unwrap().surrogate().placement();
        assert_eq!(placement, SurrogatePlacement::OffScreen);
    }

    #[test]
    fn press_focuses_and_drag_selects() {
        let (mut doc, id) = doc_with_text("abc");
        let mut tool = EditTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(29.0, 25.0), &mut tool, &mut doc);
        assert_eq!(doc.focused_field(), Some(id));
        assert_eq!(tool.active(), Some(id));
        mouse.mouse_moved(at(20.0, 25.0), &mut tool, &mut doc);
        mouse.mouse_up(at(20.0, 25.0), &mut tool, &mut doc);

        let sel = doc.text_field(id).unwrap().selection();
        assert_eq!((sel.start, sel.end), (0, 3));
        assert_eq!(sel.direction, SelectionDirection::Backward);
        assert!(tool.active().is_none());
    }

    #[test]
    fn press_elsewhere_blurs() {
        let (mut doc, id) = doc_with_text("abc");
        let mut tool = EditTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(26.0, 25.0), &mut tool, &mut doc);
        mouse.mouse_up(at(26.0, 25.0), &mut tool, &mut doc);
        assert_eq!(doc.focused_field(), Some(id));

        mouse.mouse_down(at(85.0, 85.0), &mut tool, &mut doc);
        mouse.mouse_up(at(85.0, 85.0), &mut tool, &mut doc);
        assert_eq!(doc.focused_field(), None);
        assert!(!doc.text_field(id).unwrap().visuals().caret_visible());
    }

    #[test]
    fn cancel_ends_selection_drag() {
        let (mut doc, id) = doc_with_text("abc");
        let mut tool = EditTextTool::default();
        let mut mouse = Mouse::new();

        mouse.mouse_down(at(20.0, 25.0), &mut tool, &mut doc);
        mouse.mouse_moved(at(26.0, 25.0), &mut tool, &mut doc);
        mouse.cancel(&mut tool, &mut doc);

        let field = doc.text_field(id).unwrap();
        assert!(!field.is_dragging_selection());
        let sel = field.selection();
        assert_eq!((sel.start, sel.end), (0, 2));
    }
}
