// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A text item laid out along a curve grown from grid cells.
//!
//! `CurvedTextField` owns the item's cell trail, the curve projected from
//! it, the rendered text, and the surrogate input that does the actual
//! editing. Pointer events position the surrogate and drive selection;
//! surrogate change events (`on_input`, `on_selection_change`, `on_focus`,
//! `on_blur`) copy the surrogate's state back into the rendered text and
//! visuals. Text that outgrows the path extends the trail.

use crate::editing::blink::CaretBlink;
use crate::editing::growth::{GrowthError, grow_to_fit};
use crate::editing::mouse::MouseEvent;
use crate::editing::surrogate::{OverlayInput, SurrogatePlacement, TextSurrogate};
use crate::editing::viewport::ViewPort;
use crate::editing::visuals::{FieldVisuals, compute_visuals};
use crate::grid::{GridCell, GridOccupancy};
use crate::model::ItemId;
use crate::path::{CurvePath, project_trail};
use crate::settings::Settings;
use crate::text::buffer::byte_index;
use crate::text::layout::TextOnPath;
use crate::text::measure::{MonospaceMeasure, TextMeasure};
use crate::text::selection::{SelectionDrag, SelectionHandle, SelectionState};
use kurbo::{BezPath, Point};

/// An editable text item on a curved path.
#[derive(Debug)]
pub struct CurvedTextField {
    id: ItemId,
    trail: Vec<GridCell>,
    path: CurvePath,
    /// The text as rendered along the path
    text: String,
    /// Measures text in curve space
    measure: Box<dyn TextMeasure>,
    /// Measures the surrogate's text in screen space
    mirror: Box<dyn TextMeasure>,
    surrogate: Box<dyn TextSurrogate>,
    blink: CaretBlink,
    visuals: FieldVisuals,
    settings: Settings,
    /// Whether the last pointer interaction came from touch
    touch_input: bool,
    selection_drag: Option<SelectionDrag>,
    /// Set when the last growth attempt found no free cell
    cannot_expand: bool,
}

impl CurvedTextField {
    /// Create a field occupying `cell` and claim the cell in `grid`.
    ///
    /// Measurement defaults to a monospace approximation; use
    /// [`with_measure`](Self::with_measure) for real font metrics.
    pub fn new(
        id: ItemId,
        cell: GridCell,
        settings: &Settings,
        grid: &mut dyn GridOccupancy,
    ) -> Self {
        grid.set_cell_owner(cell, id);
        let mut field = Self {
            id,
            trail: vec![cell],
            path: CurvePath::new().with_tangent_epsilon(settings.tangent_epsilon),
            text: String::new(),
            measure: Box::new(MonospaceMeasure::new(settings.font_size)),
            mirror: Box::new(MonospaceMeasure::new(settings.surrogate_font_size)),
            surrogate: Box::new(OverlayInput::new()),
            blink: CaretBlink::new(settings.caret_blink_interval),
            visuals: FieldVisuals::default(),
            settings: settings.clone(),
            touch_input: false,
            selection_drag: None,
            cannot_expand: false,
        };
        field.rebuild_path(grid);
        tracing::info!("Created {} at {:?}", id, cell);
        field
    }

    pub fn with_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.set_measure(measure);
        self
    }

    pub fn with_mirror_measure(mut self, mirror: Box<dyn TextMeasure>) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_surrogate(mut self, surrogate: Box<dyn TextSurrogate>) -> Self {
        self.surrogate = surrogate;
        self.update_visuals();
        self
    }

    pub fn set_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
        self.update_visuals();
    }

    // ===== Accessors =====

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn trail(&self) -> &[GridCell] {
        &self.trail
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> SelectionState {
        self.surrogate.selection()
    }

    pub fn is_focused(&self) -> bool {
        self.surrogate.is_focused()
    }

    pub fn visuals(&self) -> &FieldVisuals {
        &self.visuals
    }

    /// Whether the caret should be drawn this frame.
    pub fn caret_shown(&self) -> bool {
        self.visuals.caret.is_some() && self.blink.is_visible()
    }

    pub fn cannot_expand(&self) -> bool {
        self.cannot_expand
    }

    pub fn surrogate(&self) -> &dyn TextSurrogate {
        self.surrogate.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_dragging_selection(&self) -> bool {
        self.selection_drag.is_some()
    }

    pub fn layout(&self) -> TextOnPath<'_> {
        TextOnPath::new(&self.path, self.measure.as_ref(), &self.text)
    }

    /// Whether a point in curve space lies on the drawn path.
    pub fn contains(&self, local: Point) -> bool {
        self.path
            .contains_in_stroke(local, self.settings.path_thickness)
    }

    // ===== Path and trail =====

    /// Extend the trail by `cell` and claim it.
    ///
    /// Returns false, changing nothing, unless `cell` is free and shares an
    /// edge with the end of the trail.
    pub fn append_grid_cell(&mut self, cell: GridCell, grid: &mut dyn GridOccupancy) -> bool {
        if grid.is_cell_occupied(cell) {
            tracing::debug!("{} cannot take occupied {:?}", self.id, cell);
            return false;
        }
        if let Some(&last) = self.trail.last()
            && !cell.is_adjacent(last)
        {
            tracing::debug!("{}: {:?} is not next to {:?}", self.id, cell, last);
            return false;
        }
        self.trail.push(cell);
        grid.set_cell_owner(cell, self.id);
        self.rebuild_path(grid);
        true
    }

    /// Shorten the trail to `len` cells (at least one), releasing the rest.
    pub fn truncate_trail(&mut self, len: usize, grid: &mut dyn GridOccupancy) {
        let len = len.max(1);
        if self.trail.len() <= len {
            return;
        }
        for cell in self.trail.drain(len..) {
            grid.clear_cell_owner(cell);
        }
        self.rebuild_path(grid);
    }

    /// Replace the curve directly, hiding the last `cutoff` of its length.
    pub fn set_path_data(&mut self, bez: BezPath, cutoff: f64) {
        self.path.set_path(bez, cutoff);
        self.update_visuals();
    }

    fn rebuild_path(&mut self, grid: &dyn GridOccupancy) {
        let curve = project_trail(&self.trail, grid.cell_size());
        self.set_path_data(curve.bez, curve.reserve);
    }

    // ===== Surrogate events =====

    pub fn focus(&mut self) {
        if self.surrogate.is_focused() {
            return;
        }
        self.surrogate.focus();
        self.on_focus();
    }

    pub fn blur(&mut self) {
        if !self.surrogate.is_focused() {
            return;
        }
        self.surrogate.blur();
        self.on_blur();
    }

    /// The surrogate gained focus: load it with the rendered text.
    pub fn on_focus(&mut self) {
        self.surrogate.set_value(&self.text);
        self.update_visuals();
        self.blink.restart();
    }

    pub fn on_blur(&mut self) {
        self.blink.stop();
        self.selection_drag = None;
        self.update_visuals();
    }

    /// The surrogate's value changed.
    pub fn on_input(&mut self, grid: &mut dyn GridOccupancy) {
        self.text.clear();
        self.text.push_str(self.surrogate.value());
        self.grow(grid);
        self.blink.restart();
        self.update_visuals();
    }

    pub fn on_selection_change(&mut self) {
        self.blink.restart();
        self.update_visuals();
    }

    /// Advance the caret blink. Returns true when a repaint is needed.
    pub fn tick(&mut self, delta_time: f64) -> bool {
        self.blink.tick(delta_time)
    }

    // ===== Editing =====
    //
    // These drive the surrogate the way native keyboard input would and
    // then deliver the matching change event. Ignored while unfocused.

    pub fn type_text(&mut self, text: &str, grid: &mut dyn GridOccupancy) {
        if self.surrogate.is_focused() {
            self.surrogate.replace_selection(text);
            self.on_input(grid);
        }
    }

    pub fn delete_backward(&mut self, grid: &mut dyn GridOccupancy) {
        if self.surrogate.is_focused() {
            self.surrogate.delete_backward();
            self.on_input(grid);
        }
    }

    pub fn delete_forward(&mut self, grid: &mut dyn GridOccupancy) {
        if self.surrogate.is_focused() {
            self.surrogate.delete_forward();
            self.on_input(grid);
        }
    }

    /// Update IME preedit text.
    pub fn compose(&mut self, text: &str, grid: &mut dyn GridOccupancy) {
        if self.surrogate.is_focused() {
            self.surrogate.set_composition(text);
            self.on_input(grid);
        }
    }

    pub fn commit_composition(&mut self) {
        if self.surrogate.composition().is_some() {
            self.surrogate.commit_composition();
            self.on_selection_change();
        }
    }

    pub fn select(&mut self, selection: SelectionState) {
        if self.surrogate.is_focused() {
            self.surrogate.set_selection(selection);
            self.on_selection_change();
        }
    }

    pub fn select_all(&mut self) {
        if self.surrogate.is_focused() {
            self.surrogate.select_all();
            self.on_selection_change();
        }
    }

    // ===== Pointer =====

    /// Pointer moved (hover or drag), in screen coordinates.
    pub fn pointer_moved(&mut self, event: MouseEvent, viewport: &ViewPort) {
        self.position_surrogate(event, viewport);
        if let Some(drag) = self.selection_drag.as_mut() {
            let local = viewport.screen_to_local(event.pos);
            let offset =
                TextOnPath::new(&self.path, self.measure.as_ref(), &self.text).resolve_offset(local);
            let selection = drag.update(offset);
            if selection != self.surrogate.selection() {
                self.surrogate.set_selection(selection);
                self.on_selection_change();
                return;
            }
        }
        self.update_visuals();
    }

    /// Pointer pressed. Returns true if the field took the press.
    ///
    /// On a touch selection handle this starts a handle drag; anywhere on
    /// the path it focuses the field and starts a drag selection (a shift
    /// press extends the current selection instead).
    pub fn pointer_down(&mut self, event: MouseEvent, viewport: &ViewPort) -> bool {
        self.touch_input = event.is_touch();
        self.position_surrogate(event, viewport);
        let local = viewport.screen_to_local(event.pos);

        if let Some(handle) = self.handle_at(local) {
            self.begin_handle_drag(handle, event.pointer_id);
            return true;
        }
        if !self.contains(local) {
            return false;
        }

        self.focus();
        let offset = self.layout().resolve_offset(local);
        let drag = if event.mods.shift {
            SelectionDrag::extend(self.surrogate.selection(), offset)
        } else {
            SelectionDrag::begin(offset)
        };
        self.selection_drag = Some(drag);
        if let Err(err) = self.surrogate.capture_pointer(event.pointer_id) {
            tracing::warn!("{}: {}", self.id, err);
        }
        self.surrogate.set_selection(drag.selection());
        self.on_selection_change();
        true
    }

    pub fn pointer_up(&mut self, event: MouseEvent) {
        if self.selection_drag.take().is_some()
            && let Err(err) = self.surrogate.release_pointer(event.pointer_id)
        {
            tracing::warn!("{}: {}", self.id, err);
        }
        self.update_visuals();
    }

    /// Abandon a drag in progress, keeping the selection it reached.
    pub fn pointer_cancel(&mut self, pointer_id: u64) {
        if self.selection_drag.take().is_some()
            && let Err(err) = self.surrogate.release_pointer(pointer_id)
        {
            tracing::warn!("{}: {}", self.id, err);
        }
        self.update_visuals();
    }

    /// The touch selection handle under `local`, if any.
    pub fn handle_at(&self, local: Point) -> Option<SelectionHandle> {
        let radius = self.settings.path_thickness;
        self.visuals
            .handles
            .iter()
            .flatten()
            .filter(|h| h.attached)
            .find(|h| (h.position - local).hypot() <= radius)
            .map(|h| h.handle)
    }

    fn begin_handle_drag(&mut self, handle: SelectionHandle, pointer_id: u64) {
        if let Err(err) = self.surrogate.clear_platform_selection() {
            tracing::warn!("{}: {}", self.id, err);
        }
        if let Err(err) = self.surrogate.capture_pointer(pointer_id) {
            tracing::warn!("{}: {}", self.id, err);
        }
        let drag = SelectionDrag::begin_handle(self.surrogate.selection(), handle);
        tracing::debug!("{}: dragging {:?} handle ({:?})", self.id, handle, drag.target());
        self.selection_drag = Some(drag);
    }

    /// Slide the surrogate so its caret lines up with the pointer, or park
    /// it off-screen when the pointer is away from the path.
    fn position_surrogate(&mut self, event: MouseEvent, viewport: &ViewPort) {
        let local = viewport.screen_to_local(event.pos);
        if !self.contains(local) && self.selection_drag.is_none() {
            self.surrogate.place(SurrogatePlacement::OffScreen);
            return;
        }
        let offset = self.layout().resolve_offset(local);
        let prefix = &self.text[..byte_index(&self.text, offset)];
        let width = if prefix.is_empty() {
            0.0
        } else {
            match self.mirror.measure(prefix) {
                Ok(width) => width,
                Err(err) => {
                    tracing::debug!("{}: mirror measure failed: {}", self.id, err);
                    0.0
                }
            }
        };
        let height = self.mirror.line_height();
        let origin = Point::new(event.pos.x - width, event.pos.y - height / 2.0);
        self.surrogate.place(SurrogatePlacement::At {
            origin,
            width: width + self.settings.surrogate_padding,
        });
    }

    // ===== Internals =====

    fn grow(&mut self, grid: &mut dyn GridOccupancy) {
        let text_length = match self.layout().text_length() {
            Ok(len) => len,
            Err(err) => {
                tracing::warn!("{}: cannot measure text: {}", self.id, err);
                return;
            }
        };
        match grow_to_fit(&mut self.trail, &mut self.path, text_length, self.id, grid) {
            Ok(_) => self.cannot_expand = false,
            Err(err @ GrowthError::Exhausted { .. }) => {
                tracing::warn!("{} cannot expand: {}; text overflows", self.id, err);
                self.cannot_expand = true;
            }
            Err(err) => {
                tracing::warn!("{} stopped growing: {}", self.id, err);
                self.cannot_expand = true;
            }
        }
    }

    fn update_visuals(&mut self) {
        let layout = TextOnPath::new(&self.path, self.measure.as_ref(), &self.text);
        self.visuals = compute_visuals(
            &layout,
            self.surrogate.selection(),
            self.surrogate.is_focused(),
            self.touch_input,
            self.settings.font_size,
        );
    }
}
