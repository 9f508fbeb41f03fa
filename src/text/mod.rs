// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text content, measurement, selection, and layout along a curve.
//!
//! Offsets throughout are UTF-16 code units, the unit native text inputs
//! report selections in.

pub mod buffer;
pub mod layout;
pub mod measure;
pub mod selection;

pub use buffer::TextBuffer;
pub use layout::{GlyphPlacement, TextOnPath};
pub use measure::{MeasureError, MonospaceMeasure, ParleyMeasure, TextMeasure};
pub use selection::{DragTarget, SelectionDirection, SelectionDrag, SelectionHandle, SelectionState};
