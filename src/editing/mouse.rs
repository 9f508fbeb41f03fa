// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer gesture state machine.
//!
//! `Mouse` turns raw down/move/up/cancel events into higher-level
//! callbacks on a [`MouseDelegate`]: click, drag began/changed/ended, and
//! cancel. A gesture is a session with explicit start, update, end, and
//! cancel transitions, so tools never juggle global listeners.

use kurbo::Point;

/// Distance in screen pixels a pressed pointer travels before a drag starts
const MIN_DRAG_DISTANCE: f64 = 3.0;

/// Kind of device behind a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// Keyboard modifiers held during a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    pub pointer: PointerKind,
    pub pointer_id: u64,
    pub mods: Modifiers,
}

impl MouseEvent {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            pointer: PointerKind::Mouse,
            pointer_id: 1,
            mods: Modifiers::default(),
        }
    }

    pub fn touch(pos: Point) -> Self {
        Self {
            pointer: PointerKind::Touch,
            ..Self::new(pos)
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.mods.shift = true;
        self
    }

    pub fn is_touch(&self) -> bool {
        self.pointer == PointerKind::Touch
    }
}

/// An in-progress drag, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start: Point,
    pub prev: Point,
    pub current: Point,
}

/// Receiver of gesture callbacks. Every method defaults to a no-op.
#[allow(unused_variables)]
pub trait MouseDelegate {
    type Data;

    fn left_down(&mut self, event: MouseEvent, data: &mut Self::Data) {}

    fn left_up(&mut self, event: MouseEvent, data: &mut Self::Data) {}

    fn left_click(&mut self, event: MouseEvent, data: &mut Self::Data) {}

    fn mouse_moved(&mut self, event: MouseEvent, data: &mut Self::Data) {}

    fn left_drag_began(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}

    fn left_drag_changed(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}

    fn left_drag_ended(&mut self, event: MouseEvent, drag: Drag, data: &mut Self::Data) {}

    fn cancel(&mut self, data: &mut Self::Data) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum GestureState {
    #[default]
    Up,
    Down(MouseEvent),
    Dragging(Drag),
}

/// Tracks one pointer gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct Mouse {
    state: GestureState,
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    pub fn is_down(&self) -> bool {
        !matches!(self.state, GestureState::Up)
    }

    pub fn mouse_down<D: MouseDelegate>(
        &mut self,
        event: MouseEvent,
        delegate: &mut D,
        data: &mut D::Data,
    ) {
        if self.is_down() {
            // A second button or finger while a gesture runs is ignored
            tracing::debug!("Ignoring pointer down during an active gesture");
            return;
        }
        self.state = GestureState::Down(event);
        delegate.left_down(event, data);
    }

    pub fn mouse_moved<D: MouseDelegate>(
        &mut self,
        event: MouseEvent,
        delegate: &mut D,
        data: &mut D::Data,
    ) {
        match self.state {
            GestureState::Up => delegate.mouse_moved(event, data),
            GestureState::Down(down) => {
                if (event.pos - down.pos).hypot() >= MIN_DRAG_DISTANCE {
                    let drag = Drag {
                        start: down.pos,
                        prev: down.pos,
                        current: event.pos,
                    };
                    self.state = GestureState::Dragging(drag);
                    delegate.left_drag_began(event, drag, data);
                    delegate.left_drag_changed(event, drag, data);
                }
            }
            GestureState::Dragging(prev) => {
                let drag = Drag {
                    start: prev.start,
                    prev: prev.current,
                    current: event.pos,
                };
                self.state = GestureState::Dragging(drag);
                delegate.left_drag_changed(event, drag, data);
            }
        }
    }

    pub fn mouse_up<D: MouseDelegate>(
        &mut self,
        event: MouseEvent,
        delegate: &mut D,
        data: &mut D::Data,
    ) {
        match std::mem::take(&mut self.state) {
            GestureState::Up => {}
            GestureState::Down(_) => {
                delegate.left_up(event, data);
                delegate.left_click(event, data);
            }
            GestureState::Dragging(drag) => {
                let drag = Drag {
                    prev: drag.current,
                    current: event.pos,
                    ..drag
                };
                delegate.left_up(event, data);
                delegate.left_drag_ended(event, drag, data);
            }
        }
    }

    /// Abort the gesture; the delegate restores any provisional state.
    pub fn cancel<D: MouseDelegate>(&mut self, delegate: &mut D, data: &mut D::Data) {
        if std::mem::take(&mut self.state) != GestureState::Up {
            delegate.cancel(data);
        }
    }
}
