// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_pattern --heading-base-level=0

//! Understory Tile Pattern: a deterministic tiling layout for square cells.
//!
//! This crate places a dense strip of items indexed `0..len` inside a
//! fixed-width, vertically scrolling container. Items follow a fixed ten-cell
//! pattern on a three-column grid (seven small cells, one medium, one large)
//! and the pattern repeats downward for as many items as requested. Every cell
//! is square and adjacent cells are separated by a configurable gap.
//!
//! The core concepts are:
//!
//! - [`PATTERN`]: the fixed table of [`PatternCell`]s, each tagged with a
//!   [`SizeClass`] that determines its side length.
//! - [`TileGeometry`]: the pure geometry for one container width. It maps any
//!   item index to its rectangle without caching.
//! - [`TileLayout`]: a small controller that owns the container width, item
//!   count, and a fully populated rectangle cache. It answers per-item,
//!   intersection, hit-test, content-size and scroll-offset queries, and
//!   rebuilds the cache whenever the width or item count changes.
//! - [`TileLayoutConfig`]: grid width and spacing, validated into a
//!   [`LayoutError`] when it cannot hold the pattern.
//!
//! This crate deliberately does **not** know about widgets, cell recycling or
//! rendering. Host frameworks are responsible for:
//!
//! - Supplying the container width and item count when their layout is invalidated.
//! - Calling [`TileLayout::rects_intersecting`] with the visible rectangle and
//!   realizing views for the returned indices.
//! - Sizing the scroll range from [`TileLayout::content_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_tile_pattern::TileLayout;
//!
//! let mut layout = TileLayout::new();
//! layout.set_container_width(303.0);
//! layout.set_item_count(15);
//!
//! // The medium cell spans two columns plus the gap between them.
//! let medium = layout.rect_for_item(3).unwrap();
//! assert!((medium.width() - medium.height()).abs() < 1e-9);
//!
//! // A viewport covering exactly one pattern block sees its ten items.
//! let block = layout.geometry().block_height();
//! let visible: Vec<usize> = layout
//!     .rects_intersecting(Rect::new(0.0, 0.0, 303.0, block))
//!     .map(|(index, _)| index)
//!     .collect();
//! assert_eq!(visible, (0..10).collect::<Vec<_>>());
//!
//! let size = layout.content_size();
//! assert_eq!(size.width, 303.0);
//! ```
//!
//! All coordinates are `f64` logical units with the origin at the top-leading
//! corner of the content. Widths are expected to be finite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod geometry;
mod layout;
mod pattern;

pub use config::TileLayoutConfig;
pub use error::LayoutError;
pub use geometry::TileGeometry;
pub use layout::{ScrollAlign, TileLayout};
pub use pattern::{
    BLOCK_ROWS, PATTERN, PATTERN_COLUMNS, PATTERN_LEN, PatternCell, SizeClass, block_of,
};
