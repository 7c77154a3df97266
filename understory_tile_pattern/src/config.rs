// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration.

use crate::{LayoutError, PATTERN_COLUMNS};

/// Grid parameters fixed at construction of a [`TileLayout`](crate::TileLayout).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayoutConfig {
    /// Grid width in columns.
    ///
    /// Must be at least [`PATTERN_COLUMNS`]. Extra columns narrow the unit
    /// length and leave the pattern aligned to the leading edge.
    pub columns: usize,
    /// Horizontal gap between adjacent columns.
    pub inter_item_spacing: f64,
    /// Vertical gap between adjacent grid rows.
    pub line_spacing: f64,
}

impl Default for TileLayoutConfig {
    fn default() -> Self {
        Self {
            columns: PATTERN_COLUMNS,
            inter_item_spacing: 1.0,
            line_spacing: 1.0,
        }
    }
}

impl TileLayoutConfig {
    /// Checks that the configuration can lay out the pattern.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns < PATTERN_COLUMNS {
            return Err(LayoutError::TooFewColumns {
                columns: self.columns,
                required: PATTERN_COLUMNS,
            });
        }
        check_spacing("inter-item", self.inter_item_spacing)?;
        check_spacing("line", self.line_spacing)?;

        // Spanning cells absorb horizontal gaps into their square side, but
        // only line gaps separate them from the rows below. The medium cell
        // absorbs one gap against two line gaps; the large cell absorbs
        // `columns - 1` gaps against the three line gaps below it.
        let absorbed_medium = self.inter_item_spacing;
        let absorbed_large = self.inter_item_spacing * (self.columns - 1) as f64;
        if absorbed_medium > 2.0 * self.line_spacing || absorbed_large > 3.0 * self.line_spacing
        {
            return Err(LayoutError::SpacingOverflow {
                columns: self.columns,
                inter_item_spacing: self.inter_item_spacing,
                line_spacing: self.line_spacing,
            });
        }
        Ok(())
    }
}

fn check_spacing(which: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSpacing { which, value })
    }
}
