// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Document model

pub mod document;
pub mod item;
pub mod item_id;

pub use document::Document;
pub use item::{ImageItem, Item};
pub use item_id::ItemId;
