// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The text input that actually owns a curved field's text.
//!
//! Curved text cannot be edited by a native text widget directly, so each
//! field keeps an invisible input around (the surrogate) and slides it
//! under the pointer. Clicks, drag-selection, IME, clipboard, and mobile
//! selection handles are then the platform's own behaviour; the field
//! only mirrors the surrogate's value and selection onto the curve.
//!
//! [`TextSurrogate`] is the contract a platform implements. [`OverlayInput`]
//! is a headless implementation that models a native single-line input,
//! used by hosts without a native widget and by the tests.

use crate::text::buffer::TextBuffer;
use crate::text::selection::{SelectionDirection, SelectionState};
use kurbo::Point;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Platform calls that may be unsupported for some inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurrogateError {
    #[error("pointer capture failed: {0}")]
    PointerCapture(String),

    #[error("clearing the selection failed: {0}")]
    ClearSelection(String),
}

/// Where the surrogate's box currently sits, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SurrogatePlacement {
    /// Parked away from any interaction
    #[default]
    OffScreen,
    /// Positioned so the glyph under the pointer lines up with it
    At { origin: Point, width: f64 },
}

/// Contract of a focus-capturing text input used as a field's editor.
pub trait TextSurrogate: fmt::Debug {
    fn value(&self) -> &str;

    /// Replace the whole value. The caret moves to the end when the value
    /// actually changes, as native inputs do.
    fn set_value(&mut self, value: &str);

    fn selection(&self) -> SelectionState;

    fn set_selection(&mut self, selection: SelectionState);

    fn is_focused(&self) -> bool;

    fn focus(&mut self);

    fn blur(&mut self);

    fn placement(&self) -> SurrogatePlacement;

    fn place(&mut self, placement: SurrogatePlacement);

    fn capture_pointer(&mut self, _pointer_id: u64) -> Result<(), SurrogateError> {
        Ok(())
    }

    fn release_pointer(&mut self, _pointer_id: u64) -> Result<(), SurrogateError> {
        Ok(())
    }

    /// Drop any platform-level selection outside the input.
    fn clear_platform_selection(&mut self) -> Result<(), SurrogateError> {
        Ok(())
    }

    /// Marked (uncommitted IME) range, if a composition is active.
    fn composition(&self) -> Option<Range<usize>> {
        None
    }

    /// Type `text` over the current selection.
    fn replace_selection(&mut self, text: &str) {
        let sel = self.selection();
        let mut buffer = TextBuffer::new();
        buffer.set(self.value());
        let caret = buffer.replace(sel.start..sel.end, text);
        self.set_value(buffer.as_str());
        self.set_selection(SelectionState::caret_at(caret));
    }

    /// Backspace: delete the selection, or the character before the caret.
    fn delete_backward(&mut self) {
        let sel = self.selection();
        if !sel.is_collapsed() {
            self.replace_selection("");
            return;
        }
        let mut buffer = TextBuffer::new();
        buffer.set(self.value());
        let start = buffer.prev_boundary(sel.start);
        if start == sel.start {
            return;
        }
        buffer.replace(start..sel.start, "");
        self.set_value(buffer.as_str());
        self.set_selection(SelectionState::caret_at(start));
    }

    /// Delete key: delete the selection, or the character after the caret.
    fn delete_forward(&mut self) {
        let sel = self.selection();
        if !sel.is_collapsed() {
            self.replace_selection("");
            return;
        }
        let mut buffer = TextBuffer::new();
        buffer.set(self.value());
        let end = buffer.next_boundary(sel.end);
        if end == sel.end {
            return;
        }
        buffer.replace(sel.end..end, "");
        self.set_value(buffer.as_str());
        self.set_selection(SelectionState::caret_at(sel.end));
    }

    fn select_all(&mut self) {
        let mut buffer = TextBuffer::new();
        buffer.set(self.value());
        self.set_selection(SelectionState {
            start: 0,
            end: buffer.len(),
            direction: SelectionDirection::Forward,
        });
    }

    /// Update the IME preedit text. Without composition support this is
    /// a plain insertion.
    fn set_composition(&mut self, text: &str) {
        self.replace_selection(text);
    }

    /// Accept the current preedit text.
    fn commit_composition(&mut self) {}
}

/// Headless single-line input.
#[derive(Debug, Clone, Default)]
pub struct OverlayInput {
    buffer: TextBuffer,
    selection: SelectionState,
    focused: bool,
    placement: SurrogatePlacement,
    /// UTF-16 range of uncommitted IME text
    marked: Option<Range<usize>>,
    captured_pointer: Option<u64>,
}

impl OverlayInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured_pointer(&self) -> Option<u64> {
        self.captured_pointer
    }

    /// Drop the preedit text entirely (e.g. Escape during composition).
    pub fn cancel_composition(&mut self) {
        if let Some(range) = self.marked.take() {
            let caret = self.buffer.replace(range, "");
            self.selection = SelectionState::caret_at(caret);
        }
    }
}

impl TextSurrogate for OverlayInput {
    fn value(&self) -> &str {
        self.buffer.as_str()
    }

    fn set_value(&mut self, value: &str) {
        if self.buffer.as_str() == value {
            return;
        }
        self.buffer.set(value);
        self.selection = SelectionState::caret_at(self.buffer.len());
        self.marked = None;
    }

    fn selection(&self) -> SelectionState {
        self.selection
    }

    fn set_selection(&mut self, selection: SelectionState) {
        self.selection = selection.clamped(self.buffer.len());
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
        self.commit_composition();
    }

    fn placement(&self) -> SurrogatePlacement {
        self.placement
    }

    fn place(&mut self, placement: SurrogatePlacement) {
        self.placement = placement;
    }

    fn capture_pointer(&mut self, pointer_id: u64) -> Result<(), SurrogateError> {
        self.captured_pointer = Some(pointer_id);
        Ok(())
    }

    fn release_pointer(&mut self, pointer_id: u64) -> Result<(), SurrogateError> {
        if self.captured_pointer == Some(pointer_id) {
            self.captured_pointer = None;
        }
        Ok(())
    }

    fn composition(&self) -> Option<Range<usize>> {
        self.marked.clone()
    }

    fn set_composition(&mut self, text: &str) {
        let range = match self.marked.take() {
            Some(range) => range,
            None => self.selection.start..self.selection.end,
        };
        let start = range.start;
        let end = self.buffer.replace(range, text);
        self.marked = if text.is_empty() { None } else { Some(start..end) };
        self.selection = SelectionState::caret_at(end);
    }

    fn commit_composition(&mut self) {
        self.marked = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(text: &str) -> OverlayInput {
        let mut input = OverlayInput::new();
        input.set_value(text);
        input
    }

    #[test]
    fn set_value_moves_caret_to_end() {
        let input = input_with("héllo");
        assert_eq!(input.selection(), SelectionState::caret_at(5));
    }

    #[test]
    fn set_same_value_keeps_selection() {
        let mut input = input_with("hello");
        input.set_selection(SelectionState::caret_at(2));
        input.set_value("hello");
        assert_eq!(input.selection(), SelectionState::caret_at(2));
    }

    #[test]
    fn typing_replaces_selection() {
        let mut input = input_with("hello");
        input.set_selection(SelectionState::from_anchor_caret(4, 1));
        input.replace_selection("ipp");
        assert_eq!(input.value(), "hippo");
        assert_eq!(input.selection(), SelectionState::caret_at(4));
    }

    #[test]
    fn backspace_removes_whole_surrogate_pair() {
        let mut input = input_with("a😀");
        input.delete_backward();
        assert_eq!(input.value(), "a");
        assert_eq!(input.selection(), SelectionState::caret_at(1));
        input.delete_backward();
        input.delete_backward();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn delete_forward_at_caret() {
        let mut input = input_with("abc");
        input.set_selection(SelectionState::caret_at(1));
        input.delete_forward();
        assert_eq!(input.value(), "ac");
        assert_eq!(input.selection(), SelectionState::caret_at(1));
    }

    #[test]
    fn selection_is_clamped() {
        let mut input = input_with("ab");
        input.set_selection(SelectionState::from_anchor_caret(0, 10));
        assert_eq!(input.selection().end, 2);
    }

    #[test]
    fn composition_replaces_marked_text() {
        let mut input = input_with("ab");
        input.set_selection(SelectionState::caret_at(1));
        input.set_composition("k");
        assert_eq!(input.value(), "akb");
        assert_eq!(input.composition(), Some(1..2));
        input.set_composition("か");
        assert_eq!(input.value(), "aかb");
        assert_eq!(input.composition(), Some(1..2));
        input.commit_composition();
        assert_eq!(input.composition(), None);
        assert_eq!(input.selection(), SelectionState::caret_at(2));
    }

    #[test]
    fn cancel_composition_removes_preedit() {
        let mut input = input_with("ab");
        input.set_composition("xyz");
        input.cancel_composition();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.selection(), SelectionState::caret_at(2));
    }

    #[test]
    fn select_all_is_forward() {
        let mut input = input_with("abc");
        input.select_all();
        let sel = input.selection();
        assert_eq!((sel.start, sel.end), (0, 3));
        assert_eq!(sel.direction, SelectionDirection::Forward);
    }

    #[test]
    fn pointer_capture_round_trip() {
        let mut input = OverlayInput::new();
        input.capture_pointer(7).unwrap();
        assert_eq!(input.captured_pointer(), Some(7));
        input.release_pointer(7).unwrap();
        assert_eq!(input.captured_pointer(), None);
    }
}
