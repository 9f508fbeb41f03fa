// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Grype: a grid-based vector editor core with text along curved paths
//!
//! Items live on a background grid. A text item owns a trail of cells that
//! is projected onto a smooth curve; its text is drawn along the curve and
//! edited through an invisible surrogate input that follows the pointer.
//! Typing past the end of the curve grows the trail into free cells.

pub mod editing;
pub mod grid;
pub mod model;
pub mod paint;
pub mod path;
pub mod settings;
pub mod text;
pub mod theme;
pub mod tools;

pub use editing::{CurvedTextField, TextSurrogate, ViewPort};
pub use grid::{GridCell, GridOccupancy, OccupancyGrid};
pub use model::{Document, Item, ItemId};
pub use path::CurvePath;
pub use settings::Settings;
pub use text::{SelectionState, TextMeasure, TextOnPath};

/// Install the global tracing subscriber for a host application.
///
/// The filter comes from `RUST_LOG`, with this crate at `info` unless
/// overridden. Calling it a second time is a no-op.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "grype=info".parse::<tracing_subscriber::filter::Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
