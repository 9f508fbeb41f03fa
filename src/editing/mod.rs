// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod blink;
pub mod field;
pub mod growth;
pub mod mouse;
pub mod surrogate;
pub mod viewport;
pub mod visuals;

pub use blink::CaretBlink;
pub use field::CurvedTextField;
pub use growth::{GrowthError, grow_to_fit, next_cell};
pub use mouse::{Drag, Modifiers, Mouse, MouseDelegate, MouseEvent, PointerKind};
pub use surrogate::{OverlayInput, SurrogateError, SurrogatePlacement, TextSurrogate};
pub use viewport::ViewPort;
pub use visuals::{CaretVisual, FieldVisuals, HandleVisual, SelectionVisual, compute_visuals};
