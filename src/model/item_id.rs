// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for document items.
//!
//! Each `ItemId` is a monotonically increasing `u64` generated from a global
//! atomic counter. IDs key the occupancy map, so a cell's owner can always
//! be traced back to the item that claimed it. They are never reused.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an item placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

static ITEM_COUNTER: AtomicU64 = AtomicU64::new(1);

impl ItemId {
    /// Create a new unique item ID
    pub fn next() -> Self {
        Self(ITEM_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}
