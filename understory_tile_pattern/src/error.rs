// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for layout configuration and item queries.

/// Errors produced by [`TileLayout`](crate::TileLayout) and
/// [`TileLayoutConfig`](crate::TileLayoutConfig).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// An item index at or past the configured item count was requested.
    #[error("item index {index} is out of range for {item_count} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Item count the layout was populated for.
        item_count: usize,
    },
    /// The grid is too narrow to hold the pattern.
    #[error("{columns} columns cannot hold a pattern that needs {required}")]
    TooFewColumns {
        /// Configured column count.
        columns: usize,
        /// Columns the pattern occupies.
        required: usize,
    },
    /// A spacing value is negative, NaN, or infinite.
    #[error("{which} spacing must be finite and non-negative, got {value}")]
    InvalidSpacing {
        /// Which spacing was rejected (`"inter-item"` or `"line"`).
        which: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Horizontal gaps absorbed by spanning cells exceed the line gaps that
    /// separate them from the rows below, so cells would overlap.
    #[error(
        "inter-item spacing {inter_item_spacing} over {columns} columns overflows line spacing {line_spacing}"
    )]
    SpacingOverflow {
        /// Configured column count.
        columns: usize,
        /// Configured horizontal gap.
        inter_item_spacing: f64,
        /// Configured vertical gap.
        line_spacing: f64,
    },
}
