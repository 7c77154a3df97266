// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile pattern layout driven the way a scrolling host would drive it.
//!
//! This example:
//! - sizes the layout for a container width and item count,
//! - prints the scroll range and every cell rectangle,
//! - walks a viewport down the content and reports which items it realizes,
//! - resizes the container and shows the cache being rebuilt.
//!
//! Run:
//! - `cargo run -p understory_demos --example tile_pattern -- [width] [count]`
//! - add `RUST_LOG=understory_tile_pattern=trace` to see cache invalidation.

use std::env;
use std::error::Error;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_tile_pattern::{ScrollAlign, TileLayout};

const DEFAULT_WIDTH: f64 = 375.0;
const DEFAULT_COUNT: usize = 50;
const VIEWPORT_HEIGHT: f64 = 667.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let width = match args.next() {
        Some(arg) => arg.parse::<f64>()?,
        None => DEFAULT_WIDTH,
    };
    if !width.is_finite() {
        return Err(format!("width must be a finite number, got {width}").into());
    }
    let count = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_COUNT,
    };
    tracing::info!(width, count, "laying out tile pattern");

    let mut layout = TileLayout::new();
    layout.set_container_width(width);
    layout.set_item_count(count);

    let size = layout.content_size();
    let geometry = *layout.geometry();
    println!(
        "width {width}, {count} items: unit {:.2}, block {:.2}, content {:.2} x {:.2}",
        geometry.unit_length(),
        geometry.block_height(),
        size.width,
        size.height
    );
    for (index, rect) in layout.rects().iter().enumerate() {
        println!(
            "  item {index:>3}: ({:>8.2}, {:>8.2})  side {:>7.2}",
            rect.x0,
            rect.y0,
            rect.width()
        );
    }

    // Page a viewport through the content.
    let mut offset = 0.0;
    loop {
        let viewport = Rect::new(0.0, offset, width, offset + VIEWPORT_HEIGHT);
        let visible: Vec<usize> = layout
            .rects_intersecting(viewport)
            .map(|(index, _)| index)
            .collect();
        println!("viewport at {offset:>8.2}: items {visible:?}");
        offset += VIEWPORT_HEIGHT;
        if offset >= size.height {
            break;
        }
    }

    if count > 0 {
        let last = count - 1;
        let target = layout.scroll_offset_for_item(last, VIEWPORT_HEIGHT, 0.0, ScrollAlign::End)?;
        println!("scroll offset that reveals item {last}: {target:.2}");
    }

    let probe = Point::new(width / 2.0, geometry.unit_length() * 1.5);
    println!("item under {probe:?}: {:?}", layout.item_at_point(probe));

    layout.set_container_width(width * 2.0);
    println!(
        "after doubling the width, content is {:?}",
        layout.content_size()
    );

    Ok(())
}
