// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve geometry for text laid out along a path.
//!
//! `CurvePath` wraps a `kurbo::BezPath` with an arc length index so text
//! offsets can be turned into points and tangents. `trail` projects a
//! sequence of grid cells onto such a curve: one quadratic per cell plus a
//! straight tail that is measurable but never drawn.

pub mod geometry;
pub mod trail;

pub use geometry::{CurvePath, VisualTruncation};
pub use trail::{TrailCurve, project_trail};
