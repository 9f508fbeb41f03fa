// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection state and drag-to-select along a curve.
//!
//! `SelectionState` mirrors what a native text input reports:
//! `(start, end, direction)`. The raw fields are always ordered
//! (`start <= end`); the direction says which end is the anchor and which
//! is the moving caret.

/// Which end of the selection moves when it is extended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDirection {
    Forward,
    Backward,
    #[default]
    None,
}

/// A text selection in UTF-16 offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub start: usize,
    pub end: usize,
    pub direction: SelectionDirection,
}

impl SelectionState {
    /// A collapsed selection (caret) at `offset`.
    pub fn caret_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            direction: SelectionDirection::None,
        }
    }

    /// Build a selection from its anchor and caret.
    ///
    /// The direction is backward exactly when the caret sits before the
    /// anchor. A collapsed selection has no direction, same as
    /// [`caret_at`](Self::caret_at).
    pub fn from_anchor_caret(anchor: usize, caret: usize) -> Self {
        let direction = match caret.cmp(&anchor) {
            std::cmp::Ordering::Less => SelectionDirection::Backward,
            std::cmp::Ordering::Equal => SelectionDirection::None,
            std::cmp::Ordering::Greater => SelectionDirection::Forward,
        };
        Self {
            start: anchor.min(caret),
            end: anchor.max(caret),
            direction,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// The fixed end.
    pub fn anchor(&self) -> usize {
        match self.direction {
            SelectionDirection::Backward => self.end,
            _ => self.start,
        }
    }

    /// The moving end.
    pub fn caret(&self) -> usize {
        match self.direction {
            SelectionDirection::Backward => self.start,
            _ => self.end,
        }
    }

    /// Clamp both ends to a text of length `len`.
    pub fn clamped(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
            direction: self.direction,
        }
    }
}

/// One of the two draggable handles shown for a touch selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionHandle {
    /// Handle at `SelectionState::start`
    Start,
    /// Handle at `SelectionState::end`
    End,
}

/// Which stored offset a drag moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Caret,
    Anchor,
}

/// An in-progress drag that extends a selection along the curve.
///
/// Pointer movement updates `caret`, unless a handle drag grabbed the
/// anchor end, in which case it updates `anchor`. Either way the result is
/// `(min, max, Backward iff caret < anchor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionDrag {
    anchor: usize,
    caret: usize,
    target: DragTarget,
}

impl SelectionDrag {
    /// Plain drag starting at `offset`.
    pub fn begin(offset: usize) -> Self {
        Self {
            anchor: offset,
            caret: offset,
            target: DragTarget::Caret,
        }
    }

    /// Shift-drag: keep the current anchor and move the caret.
    pub fn extend(selection: SelectionState, offset: usize) -> Self {
        Self {
            anchor: selection.anchor(),
            caret: offset,
            target: DragTarget::Caret,
        }
    }

    /// Drag one of the touch handles of an existing selection.
    ///
    /// The grabbed end is whichever of anchor/caret currently sits at the
    /// handle's boundary.
    pub fn begin_handle(selection: SelectionState, handle: SelectionHandle) -> Self {
        let backward = selection.direction == SelectionDirection::Backward;
        let target = match (handle, backward) {
            (SelectionHandle::End, false) | (SelectionHandle::Start, true) => DragTarget::Caret,
            (SelectionHandle::Start, false) | (SelectionHandle::End, true) => DragTarget::Anchor,
        };
        Self {
            anchor: selection.anchor(),
            caret: selection.caret(),
            target,
        }
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    /// Move the grabbed end to `offset` and return the new selection.
    pub fn update(&mut self, offset: usize) -> SelectionState {
        match self.target {
            DragTarget::Caret => self.caret = offset,
            DragTarget::Anchor => self.anchor = offset,
        }
        self.selection()
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState::from_anchor_caret(self.anchor, self.caret)
    }
}
