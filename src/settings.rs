// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! The constants below are the defaults. A host can override any of them
//! with a TOML file deserialized into [`Settings`]; missing keys fall back
//! to the constants. Visual styling (colors) belongs in `theme.rs`.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// CURVED TEXT FIELD
// ============================================================================
/// Stroke width of the rendered path (curve space units)
const PATH_THICKNESS: f64 = 9.0;

/// Font size of the text laid out along the path (curve space units)
const FONT_SIZE: f64 = 5.0;

/// Selection highlight thickness, as a fraction of the path thickness
const SELECTION_THICKNESS_RATIO: f64 = 0.6;

/// Sampling distance used to estimate the tangent at an arc length
const TANGENT_EPSILON: f64 = 0.01;

/// Accuracy passed to kurbo arc length solvers
const ARCLEN_ACCURACY: f64 = 1e-6;

// ============================================================================
// CARET
// ============================================================================
/// Caret blink half-period in seconds
const CARET_BLINK_INTERVAL: f64 = 0.5;

/// Caret stroke width (curve space units)
const CARET_WIDTH: f64 = 0.5;

// ============================================================================
// SURROGATE INPUT
// ============================================================================
/// Font size of the overlay input's mirror measurement (screen pixels)
const SURROGATE_FONT_SIZE: f64 = 10.0;

/// Extra width given to the overlay input so it never scrolls
const SURROGATE_PADDING: f64 = 20.0;

// ============================================================================
// GRID
// ============================================================================
/// Size of one grid cell in curve space
const CELL_SIZE: (f64, f64) = (10.0, 10.0);

/// Number of cells along each axis (x, y)
const GRID_SIZE: (i32, i32) = (10, 10);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Curved text field geometry defaults
pub mod field {
    pub const PATH_THICKNESS: f64 = super::PATH_THICKNESS;
    pub const FONT_SIZE: f64 = super::FONT_SIZE;
    pub const SELECTION_THICKNESS_RATIO: f64 = super::SELECTION_THICKNESS_RATIO;
    pub const TANGENT_EPSILON: f64 = super::TANGENT_EPSILON;
    pub const ARCLEN_ACCURACY: f64 = super::ARCLEN_ACCURACY;
}

/// Caret appearance and timing
pub mod caret {
    pub const BLINK_INTERVAL: f64 = super::CARET_BLINK_INTERVAL;
    pub const WIDTH: f64 = super::CARET_WIDTH;
}

/// Overlay input placement
pub mod surrogate {
    pub const FONT_SIZE: f64 = super::SURROGATE_FONT_SIZE;
    pub const PADDING: f64 = super::SURROGATE_PADDING;
}

/// Background grid
pub mod grid {
    pub const CELL_SIZE: (f64, f64) = super::CELL_SIZE;
    pub const GRID_SIZE: (i32, i32) = super::GRID_SIZE;
}

// ============================================================================
// RUNTIME OVERRIDES
// ============================================================================

/// Errors raised while reading a settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The TOML text could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

/// Runtime settings for curved text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub path_thickness: f64,
    pub font_size: f64,
    pub selection_thickness_ratio: f64,
    pub tangent_epsilon: f64,
    /// Caret blink half-period in seconds
    pub caret_blink_interval: f64,
    pub caret_width: f64,
    pub surrogate_font_size: f64,
    pub surrogate_padding: f64,
    pub cell_size: (f64, f64),
    pub grid_size: (i32, i32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path_thickness: field::PATH_THICKNESS,
            font_size: field::FONT_SIZE,
            selection_thickness_ratio: field::SELECTION_THICKNESS_RATIO,
            tangent_epsilon: field::TANGENT_EPSILON,
            caret_blink_interval: caret::BLINK_INTERVAL,
            caret_width: caret::WIDTH,
            surrogate_font_size: surrogate::FONT_SIZE,
            surrogate_padding: surrogate::PADDING,
            cell_size: grid::CELL_SIZE,
            grid_size: grid::GRID_SIZE,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text, filling missing keys with defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file on disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("path_thickness", self.path_thickness),
            ("font_size", self.font_size),
            ("tangent_epsilon", self.tangent_epsilon),
            ("caret_blink_interval", self.caret_blink_interval),
            ("surrogate_font_size", self.surrogate_font_size),
            ("cell_size.x", self.cell_size.0),
            ("cell_size.y", self.cell_size.1),
        ];
        for (key, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SettingsError::InvalidSetting {
                    key,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }
        if self.grid_size.0 <= 0 || self.grid_size.1 <= 0 {
            return Err(SettingsError::InvalidSetting {
                key: "grid_size",
                reason: format!("expected positive cell counts, got {:?}", self.grid_size),
            });
        }
        Ok(())
    }
}
