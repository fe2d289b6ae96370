// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Virtual List: core 1D windowed-list primitives.
//!
//! This crate provides a small, renderer-agnostic core for windowing a dense
//! strip of uniform rows indexed `0..len`: render only the rows near the
//! viewport, with spacer extents before and after them preserving the full
//! scrollable extent so native scrollbar geometry stays correct.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents,
//!   offsets, and scroll positions.
//! - [`visible_range`]: a pure function mapping scroll offset, row extent,
//!   viewport extent, and row-count overscan to the half-open index range
//!   a host should realize.
//! - [`WindowedList`]: a controller that owns scroll state, viewport and row
//!   extents, and overscan, caches the most recent [`WindowLayout`], slices
//!   caller-owned items into [`Row`] views, and provides index-based
//!   scrolling via [`ScrollAlign`].
//!
//! This crate deliberately does **not** know about widgets, display trees,
//! or any particular UI framework. Hosts are responsible for:
//!
//! - Owning the actual item data and view/widget instances.
//! - Calling [`WindowedList::layout`] when scroll or viewport changes.
//! - Diffing the returned `[start, end)` range to create/destroy children,
//!   keyed per [`RowKey`].
//! - Stacking lead spacer, realized rows, and tail spacer to present a
//!   surface of exactly `len * row_extent`.
//!
//! ## Minimal example
//!
//! ```rust
//! use windrow_virtual_list::WindowedList;
//!
//! // A 1000-row feed with the default 80-unit rows and 600-unit viewport.
//! let mut list = WindowedList::<f64>::new(1000);
//! list.set_scroll_offset(2000.0);
//!
//! let layout = list.layout();
//! assert_eq!(layout.range.start, 20);
//! assert_eq!(layout.range.end_inclusive(), Some(38));
//! assert_eq!(
//!     layout.lead_extent + layout.rows_extent + layout.tail_extent,
//!     layout.total_extent,
//! );
//! ```
//!
//! Rows are uniform by design; variable-extent rows would need a
//! prefix-sum extent model and are out of scope for this crate.
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite and
//! non-negative; malformed values are clamped to safe ones rather than
//! panicking. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod range;
mod rows;
mod scalar;
mod window;

pub use range::{VisibleRange, visible_range};
pub use rows::{Row, RowKey, Rows};
pub use scalar::Scalar;
pub use window::{
    DEFAULT_OVERSCAN_ROWS, DEFAULT_ROW_EXTENT, DEFAULT_VIEWPORT_EXTENT, ScrollAlign, WindowLayout,
    WindowedList, WindowedListDebugInfo,
};
