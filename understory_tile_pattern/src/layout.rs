// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A layout controller that owns the container width, item count, and the
//! populated rectangle cache.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace};

use crate::{LayoutError, TileGeometry, TileLayoutConfig};

/// Alignment mode when scrolling a specific item into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top edge of the item with the top of the viewport.
    Start,
    /// Center the item vertically within the viewport.
    Center,
    /// Align the bottom edge of the item with the bottom of the viewport.
    End,
    /// Move just enough to make the item fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// Tile pattern layout for a fixed-width, vertically scrolling container.
///
/// This type:
/// - stores the container width and item count supplied by the host,
/// - derives a [`TileGeometry`] for the current width,
/// - eagerly populates one rectangle per item on the first query after any
///   change, and serves every later query from that cache,
/// - answers per-item, intersection, hit-test and content-size queries.
///
/// Query methods take `&mut self` because they may rebuild the cache. A
/// rectangle computed for one `(width, item_count)` pair is never returned
/// after either value changes.
#[derive(Debug, Clone)]
pub struct TileLayout {
    config: TileLayoutConfig,
    container_width: f64,
    item_count: usize,

    dirty: bool,
    geometry: TileGeometry,
    rects: Vec<Rect>,
    content_size: Size,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::from_valid_config(TileLayoutConfig::default())
    }
}

impl TileLayout {
    /// Creates an empty layout with the default three-column grid and unit spacing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty layout with a custom grid configuration.
    pub fn with_config(config: TileLayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TileLayoutConfig) -> Self {
        Self {
            config,
            container_width: 0.0,
            item_count: 0,
            dirty: true,
            geometry: TileGeometry::new(config, 0.0),
            rects: Vec::new(),
            content_size: Size::ZERO,
        }
    }

    /// Returns the grid configuration.
    #[must_use]
    pub const fn config(&self) -> &TileLayoutConfig {
        &self.config
    }

    /// Returns the current container width.
    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Sets the container width.
    ///
    /// Negative widths are clamped to `0.0`. The cache is marked stale only
    /// when the width actually changes; nothing is recomputed until the next
    /// query.
    pub fn set_container_width(&mut self, width: f64) {
        debug_assert!(
            width.is_finite(),
            "TileLayout widths must be finite; got {width:?}"
        );
        let width = width.max(0.0);
        if width != self.container_width {
            trace!(
                old = self.container_width,
                new = width,
                "container width changed"
            );
            self.container_width = width;
            self.dirty = true;
        }
    }

    /// Returns the current item count.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the number of items to lay out.
    pub fn set_item_count(&mut self, count: usize) {
        if count != self.item_count {
            trace!(old = self.item_count, new = count, "item count changed");
            self.item_count = count;
            self.dirty = true;
        }
    }

    /// Marks the cache stale so the next query rebuilds it.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` if the cache currently matches the width and item count.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        !self.dirty
    }

    /// Populates the rectangle cache if it is stale.
    ///
    /// Every query calls this; hosts may call it up front to move the O(n)
    /// rebuild out of the first visibility query.
    pub fn prepare(&mut self) {
        if !self.dirty {
            return;
        }
        let geometry = TileGeometry::new(self.config, self.container_width);
        self.rects.clear();
        self.rects
            .extend((0..self.item_count).map(|index| geometry.rect_at(index)));
        let height = self.rects.last().map_or(0.0, |rect| rect.y1);
        self.content_size = Size::new(self.container_width, height);
        self.geometry = geometry;
        self.dirty = false;
        debug!(
            width = self.container_width,
            item_count = self.item_count,
            unit_length = geometry.unit_length(),
            block_height = geometry.block_height(),
            "tile layout populated"
        );
    }

    /// Returns the geometry for the current width.
    #[must_use]
    pub fn geometry(&mut self) -> &TileGeometry {
        self.prepare();
        &self.geometry
    }

    /// Returns every populated item rectangle, in index order.
    #[must_use]
    pub fn rects(&mut self) -> &[Rect] {
        self.prepare();
        &self.rects
    }

    /// Returns the rectangle of item `index`.
    ///
    /// Fails with [`LayoutError::IndexOutOfRange`] when `index` is not below
    /// the item count.
    pub fn rect_for_item(&mut self, index: usize) -> Result<Rect, LayoutError> {
        self.prepare();
        self.rects
            .get(index)
            .copied()
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                item_count: self.item_count,
            })
    }

    /// Iterates over `(index, rect)` for every item overlapping `query`, in
    /// ascending index order.
    ///
    /// Rectangles that only share an edge with `query` are not included.
    pub fn rects_intersecting(
        &mut self,
        query: Rect,
    ) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.prepare();
        self.rects
            .iter()
            .copied()
            .enumerate()
            .filter(move |(_, rect)| intersects(rect, &query))
    }

    /// Returns the size of the scrollable content.
    ///
    /// The width is the container width; the height is the bottom edge of
    /// the last item, or `0.0` when there are no items.
    #[must_use]
    pub fn content_size(&mut self) -> Size {
        self.prepare();
        self.content_size
    }

    /// Returns the item whose rectangle contains `point`, if any.
    ///
    /// Cells are treated as half-open (`[x0, x1) × [y0, y1)`), so gaps between
    /// cells and the trailing edges hit nothing.
    #[must_use]
    pub fn item_at_point(&mut self, point: Point) -> Option<usize> {
        self.prepare();
        self.rects.iter().position(|rect| {
            rect.x0 <= point.x && point.x < rect.x1 && rect.y0 <= point.y && point.y < rect.y1
        })
    }

    /// Computes the vertical scroll offset that brings item `index` into view.
    ///
    /// - [`ScrollAlign::Start`] aligns the top of the item with the top of the viewport.
    /// - [`ScrollAlign::End`] aligns the bottom of the item with the bottom of the viewport.
    /// - [`ScrollAlign::Center`] centers the item within the viewport.
    /// - [`ScrollAlign::Nearest`] keeps `current_offset` if the item is already
    ///   fully visible, otherwise aligns whichever edge is closer.
    ///
    /// The result is clamped so the viewport stays within the content.
    pub fn scroll_offset_for_item(
        &mut self,
        index: usize,
        viewport_height: f64,
        current_offset: f64,
        align: ScrollAlign,
    ) -> Result<f64, LayoutError> {
        let rect = self.rect_for_item(index)?;
        let viewport = viewport_height.max(0.0);
        let item_start = rect.y0;
        let item_end = rect.y1;

        let offset = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport,
            ScrollAlign::Center => (item_start + item_end) / 2.0 - viewport / 2.0,
            ScrollAlign::Nearest => {
                let viewport_start = current_offset;
                let viewport_end = current_offset + viewport;
                if item_start >= viewport_start && item_end <= viewport_end {
                    current_offset
                } else if item_start < viewport_start {
                    item_start
                } else {
                    item_end - viewport
                }
            }
        };

        let max_offset = (self.content_size.height - viewport).max(0.0);
        Ok(offset.max(0.0).min(max_offset))
    }
}

/// Strict AABB overlap: touching edges do not count.
fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
