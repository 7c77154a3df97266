// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure per-width geometry of the tile pattern.

use kurbo::Rect;

use crate::{BLOCK_ROWS, PatternCell, TileLayoutConfig, block_of};

/// Geometry derived from a container width and a [`TileLayoutConfig`].
///
/// This is the stateless half of the layout: it answers "where does item `i`
/// go" for any index without bounds checks or caching. [`TileLayout`](crate::TileLayout)
/// wraps it with an item count and a populated rectangle cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    config: TileLayoutConfig,
    container_width: f64,
    unit_length: f64,
    block_height: f64,
}

impl TileGeometry {
    /// Derives geometry for `container_width`.
    ///
    /// Negative widths are clamped to `0.0`. A zero width is accepted and
    /// yields degenerate (zero or negative sized) cells.
    #[must_use]
    pub fn new(config: TileLayoutConfig, container_width: f64) -> Self {
        debug_assert!(
            container_width.is_finite(),
            "TileGeometry widths must be finite; got {container_width:?}"
        );
        let container_width = container_width.max(0.0);
        let columns = config.columns.max(1) as f64;
        let unit_length =
            (container_width - config.inter_item_spacing * (columns - 1.0)) / columns;
        let rows = BLOCK_ROWS as f64;
        let block_height = unit_length * rows + config.line_spacing * rows;
        Self {
            config,
            container_width,
            unit_length,
            block_height,
        }
    }

    /// Returns the configuration this geometry was derived with.
    #[must_use]
    pub const fn config(&self) -> &TileLayoutConfig {
        &self.config
    }

    /// Returns the (clamped) container width.
    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Side length of one grid unit.
    #[must_use]
    pub const fn unit_length(&self) -> f64 {
        self.unit_length
    }

    /// Vertical distance between the tops of consecutive pattern blocks.
    #[must_use]
    pub const fn block_height(&self) -> f64 {
        self.block_height
    }

    /// Returns the square cell rectangle for item `index`.
    #[must_use]
    pub fn rect_at(&self, index: usize) -> Rect {
        let cell = PatternCell::for_index(index);
        let u = self.unit_length;
        let column = cell.column as f64;
        let row = cell.row as f64;
        let x = u * column + self.config.inter_item_spacing * column;
        let y = u * row
            + self.config.line_spacing * row
            + self.block_height * block_of(index) as f64;
        let side = cell.side_length(u, self.config.inter_item_spacing, self.config.columns);
        Rect::new(x, y, x + side, y + side)
    }
}

#[cfg(test)]
mod tests {
    use super::TileGeometry;
    use crate::TileLayoutConfig;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn unit_and_block_for_width_303() {
        let geometry = TileGeometry::new(TileLayoutConfig::default(), 303.0);
        let u = 301.0 / 3.0;
        assert!(close(geometry.unit_length(), u));
        assert!(close(geometry.block_height(), 7.0 * u + 7.0));
    }

    #[test]
    fn reference_cells_for_width_303() {
        let geometry = TileGeometry::new(TileLayoutConfig::default(), 303.0);
        let u = geometry.unit_length();

        let r0 = geometry.rect_at(0);
        assert_eq!((r0.x0, r0.y0), (0.0, 0.0));
        assert!(close(r0.width(), u));

        let r3 = geometry.rect_at(3);
        assert_eq!(r3.x0, 0.0);
        assert!(close(r3.y0, u + 1.0));
        assert!(close(r3.width(), 2.0 * u + 1.0));
        assert!(close(r3.height(), 2.0 * u + 1.0));

        // The large cell spans the full container: 3u + 2 gaps.
        let r9 = geometry.rect_at(9);
        assert!(close(r9.width(), 3.0 * u + 2.0));
        assert!(close(r9.x1, 303.0));
    }

    #[test]
    fn negative_width_is_clamped() {
        let geometry = TileGeometry::new(TileLayoutConfig::default(), -50.0);
        assert_eq!(geometry.container_width(), 0.0);
        assert!(close(geometry.unit_length(), -2.0 / 3.0));
    }

    #[test]
    fn wider_grid_keeps_pattern_on_leading_edge() {
        let config = TileLayoutConfig {
            columns: 4,
            inter_item_spacing: 0.0,
            line_spacing: 0.0,
        };
        let geometry = TileGeometry::new(config, 400.0);
        assert!(close(geometry.unit_length(), 100.0));
        // Item 2 sits in the third of four columns.
        assert!(close(geometry.rect_at(2).x0, 200.0));
        assert!(close(geometry.rect_at(2).x1, 300.0));
    }
}
