// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed repeating cell pattern.
//!
//! One pattern *block* is ten cells laid out on a three-column grid:
//!
//! ```text
//! row 0:  [S][S][S]
//! row 1:  [ M  ][S]
//! row 2:  [    ][S]
//! row 3:  [S][S][S]
//! row 4:  [   L   ]
//! row 5:  [       ]
//! row 6:  [       ]
//! ```
//!
//! The block repeats vertically, so item `i` uses `PATTERN[i % PATTERN_LEN]`
//! in block `i / PATTERN_LEN`.

/// Size class of a pattern cell.
///
/// The class decides how many inter-item gaps a cell absorbs on top of its
/// `span` grid units, so spanning cells line up with the edges of the cells
/// around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// One grid unit, no absorbed gaps.
    Small,
    /// Spans grid units plus the single gap between them.
    Medium,
    /// Spans the full grid width, absorbing every column gap.
    Large,
}

impl SizeClass {
    /// Side length of a cell of this class.
    ///
    /// - `unit` is the side length of one grid unit.
    /// - `span` is the number of grid units covered.
    /// - `spacing` is the horizontal gap between adjacent columns.
    /// - `columns` is the grid width in columns.
    #[must_use]
    pub fn side_length(self, unit: f64, span: usize, spacing: f64, columns: usize) -> f64 {
        let base = unit * span as f64;
        match self {
            Self::Small => base,
            Self::Medium => base + spacing,
            Self::Large => base + spacing * columns.saturating_sub(1) as f64,
        }
    }
}

/// One entry of the fixed pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternCell {
    /// Size class of the cell.
    pub size_class: SizeClass,
    /// Zero-based column of the cell's leading edge.
    pub column: usize,
    /// Zero-based row of the cell's top edge within the block.
    pub row: usize,
    /// Number of grid units the cell covers along both axes.
    pub span: usize,
}

impl PatternCell {
    const fn new(size_class: SizeClass, column: usize, row: usize, span: usize) -> Self {
        Self {
            size_class,
            column,
            row,
            span,
        }
    }

    /// Returns the pattern entry used by item `index`.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        PATTERN[index % PATTERN_LEN]
    }

    /// Side length of this cell; see [`SizeClass::side_length`].
    #[must_use]
    pub fn side_length(&self, unit: f64, spacing: f64, columns: usize) -> f64 {
        self.size_class.side_length(unit, self.span, spacing, columns)
    }

    /// One past the last grid row this cell covers.
    #[must_use]
    pub const fn row_end(&self) -> usize {
        self.row + self.span
    }
}

/// Number of cells in one pattern block.
pub const PATTERN_LEN: usize = 10;

/// Number of grid columns the pattern occupies.
pub const PATTERN_COLUMNS: usize = 3;

/// The repeating pattern, in item order.
pub const PATTERN: [PatternCell; PATTERN_LEN] = [
    PatternCell::new(SizeClass::Small, 0, 0, 1),
    PatternCell::new(SizeClass::Small, 1, 0, 1),
    PatternCell::new(SizeClass::Small, 2, 0, 1),
    PatternCell::new(SizeClass::Medium, 0, 1, 2),
    PatternCell::new(SizeClass::Small, 2, 1, 1),
    PatternCell::new(SizeClass::Small, 2, 2, 1),
    PatternCell::new(SizeClass::Small, 0, 3, 1),
    PatternCell::new(SizeClass::Small, 1, 3, 1),
    PatternCell::new(SizeClass::Small, 2, 3, 1),
    PatternCell::new(SizeClass::Large, 0, 4, 3),
];

/// Grid rows covered by one block, taken from the table's final entry.
pub const BLOCK_ROWS: usize = PATTERN[PATTERN_LEN - 1].row_end();

/// Returns the zero-based block that item `index` falls into.
#[must_use]
pub const fn block_of(index: usize) -> usize {
    index / PATTERN_LEN
}

#[cfg(test)]
mod tests {
    use super::{BLOCK_ROWS, PATTERN, PATTERN_COLUMNS, PatternCell, SizeClass, block_of};

    #[test]
    fn table_shape() {
        let small = PATTERN
            .iter()
            .filter(|c| c.size_class == SizeClass::Small)
            .count();
        assert_eq!(small, 7, "seven small cells per block");
        assert_eq!(PATTERN[3].size_class, SizeClass::Medium);
        assert_eq!(PATTERN[9].size_class, SizeClass::Large);
        assert_eq!(BLOCK_ROWS, 7);
        for cell in PATTERN {
            assert!(
                cell.column + cell.span <= PATTERN_COLUMNS,
                "cell {cell:?} overflows the grid"
            );
        }
    }

    #[test]
    fn side_lengths_absorb_gaps() {
        let u = 10.0;
        assert_eq!(SizeClass::Small.side_length(u, 1, 1.0, 3), 10.0);
        assert_eq!(SizeClass::Medium.side_length(u, 2, 1.0, 3), 21.0);
        assert_eq!(SizeClass::Large.side_length(u, 3, 1.0, 3), 32.0);
    }

    #[test]
    fn index_maps_into_repeating_blocks() {
        assert_eq!(PatternCell::for_index(13), PATTERN[3]);
        assert_eq!(PatternCell::for_index(29), PATTERN[9]);
        assert_eq!(block_of(9), 0);
        assert_eq!(block_of(10), 1);
        assert_eq!(block_of(25), 2);
    }
}
