// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const GRID_LINE: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const CELL_PREVIEW: Color = Color::from_rgb8(0x90, 0xee, 0x90);
const IMAGE_PLACEHOLDER: Color = Color::from_rgb8(0x60, 0x60, 0x60);

// ============================================================================
// CURVED TEXT FIELD
// ============================================================================
const FIELD_PATH: Color = Color::from_rgb8(0xff, 0xff, 0xff);
// Thin outline drawn under the path so it reads on light backgrounds
const FIELD_PATH_BORDER: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const FIELD_TEXT: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const CARET: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const SELECTION: Color = Color::from_rgba8(0x00, 0x78, 0xd7, 0x4d); // rgba(0,120,215,0.3)
const SELECTION_HANDLE: Color = Color::from_rgb8(0x00, 0x78, 0xd7);
const SELECTION_HANDLE_DETACHED: Color = Color::from_rgb8(0x90, 0x90, 0x90);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Canvas and grid colors
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
    pub const GRID_LINE: Color = super::GRID_LINE;
    pub const CELL_PREVIEW: Color = super::CELL_PREVIEW;
    pub const IMAGE_PLACEHOLDER: Color = super::IMAGE_PLACEHOLDER;
}

/// Curved text field colors
pub mod field {
    use super::Color;
    pub const PATH: Color = super::FIELD_PATH;
    pub const PATH_BORDER: Color = super::FIELD_PATH_BORDER;
    pub const TEXT: Color = super::FIELD_TEXT;
    pub const CARET: Color = super::CARET;
    pub const SELECTION: Color = super::SELECTION;
    pub const HANDLE: Color = super::SELECTION_HANDLE;
    pub const HANDLE_DETACHED: Color = super::SELECTION_HANDLE_DETACHED;
}
