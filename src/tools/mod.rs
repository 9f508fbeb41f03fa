// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for placing and editing items on the grid

use crate::editing::{Drag, MouseDelegate, MouseEvent};
use crate::model::Document;
use kurbo::Affine;
use masonry::vello::Scene;

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Create text items and drag out their trail of cells
    PlaceText,
    /// Focus text items, select, and type
    EditText,
}

// ===== Tool Trait =====

/// A tool for working on the grid document
pub trait Tool: MouseDelegate<Data = Document> {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Paint tool-specific overlays
    fn paint(&mut self, _scene: &mut Scene, _doc: &Document, _transform: &Affine) {}
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    PlaceText(place::PlaceTextTool),
    EditText(edit::EditTextTool),
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::for_id(ToolId::EditText)
    }
}

// ===== ToolBox Implementation =====

impl ToolBox {
    /// Create a tool by ID
    pub fn for_id(id: ToolId) -> Self {
        match id {
            ToolId::PlaceText => ToolBox::PlaceText(place::PlaceTextTool::default()),
            ToolId::EditText => ToolBox::EditText(edit::EditTextTool::default()),
        }
    }

    /// Get the tool ID
    pub fn id(&self) -> ToolId {
        match self {
            ToolBox::PlaceText(tool) => tool.id(),
            ToolBox::EditText(tool) => tool.id(),
        }
    }

    /// Paint tool overlays
    pub fn paint(&mut self, scene: &mut Scene, doc: &Document, transform: &Affine) {
        match self {
            ToolBox::PlaceText(tool) => tool.paint(scene, doc, transform),
            ToolBox::EditText(tool) => tool.paint(scene, doc, transform),
        }
    }
}

// ===== MouseDelegate Implementation =====

/// Implement MouseDelegate for ToolBox so it can be used with the Mouse
/// state machine
impl MouseDelegate for ToolBox {
    type Data = Document;

    fn left_down(&mut self, event: MouseEvent, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.left_down(event, data),
            ToolBox::EditText(tool) => tool.left_down(event, data),
        }
    }

    fn left_up(&mut self, event: MouseEvent, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.left_up(event, data),
            ToolBox::EditText(tool) => tool.left_up(event, data),
        }
    }

    fn left_click(&mut self, event: MouseEvent, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.left_click(event, data),
            ToolBox::EditText(tool) => tool.left_click(event, data),
        }
    }

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.mouse_moved(event, data),
            ToolBox::EditText(tool) => tool.mouse_moved(event, data),
        }
    }

    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.left_drag_began(event, drag, data),
            ToolBox::EditText(tool) => tool.left_drag_began(event, drag, data),
        }
    }

    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.left_drag_changed(event, drag, data),
            ToolBox::EditText(tool) => tool.left_drag_changed(event, drag, data),
        }
    }

    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.left_drag_ended(event, drag, data),
            ToolBox::EditText(tool) => tool.left_drag_ended(event, drag, data),
        }
    }

    fn cancel(&mut self, data: &mut Document) {
        match self {
            ToolBox::PlaceText(tool) => tool.cancel(data),
            ToolBox::EditText(tool) => tool.cancel(data),
        }
    }
}

// ===== Tool Modules =====

pub mod edit;
pub mod place;
