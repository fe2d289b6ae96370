// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowed-list controller: scroll state, cached layout, and row slicing.

use crate::range::{sanitize_extent, sanitize_row_extent, visible_range};
use crate::rows::{Row, RowKey, Rows};
use crate::{Scalar, VisibleRange};

/// Default row extent in scroll-axis units.
pub const DEFAULT_ROW_EXTENT: usize = 80;
/// Default viewport extent in scroll-axis units.
pub const DEFAULT_VIEWPORT_EXTENT: usize = 600;
/// Default overscan, in whole rows per side.
pub const DEFAULT_OVERSCAN_ROWS: usize = 5;

/// Alignment used by [`WindowedList::scroll_to_row`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the row start to the viewport start.
    Start,
    /// Center the row in the viewport.
    Center,
    /// Align the row end to the viewport end.
    End,
    /// Scroll the minimum amount that brings the row fully into view;
    /// no-op if it already is.
    #[default]
    Auto,
}

/// Spacer-and-range layout for one frame of a windowed list.
///
/// `lead_extent`, `rows_extent`, and `tail_extent` always sum to
/// `total_extent`, so a host that stacks spacer/rows/spacer presents a
/// scrollable surface of exactly `len * row_extent` and native scrollbar
/// geometry stays correct. All three are derived from whole-row counts, so
/// the trailing spacer cannot go negative on a partial last page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowLayout<S> {
    /// Rows to realize.
    pub range: VisibleRange,
    /// Extent of the spacer before the first realized row.
    pub lead_extent: S,
    /// Combined extent of the realized rows.
    pub rows_extent: S,
    /// Extent of the spacer after the last realized row.
    pub tail_extent: S,
    /// Full scrollable extent of the strip.
    pub total_extent: S,
}

/// Controller for a windowed (virtualized) list of uniform rows.
///
/// Owns the viewport state — scroll offset, viewport extent, row extent,
/// overscan — plus the strip length, and produces a [`WindowLayout`] on
/// demand. The most recent layout is cached; every setter that changes an
/// input invalidates it, so resizes and strip growth are picked up on the
/// next query, not only on scroll.
///
/// Item data stays caller-owned: the controller stores counts and extents
/// only, and [`WindowedList::rows`] borrows the item slice per call.
///
/// ```
/// use windrow_virtual_list::WindowedList;
///
/// let mut list = WindowedList::<f64>::new(1000);
/// list.set_scroll_offset(2000.0);
///
/// let layout = list.layout();
/// assert_eq!(layout.range.start, 20);
/// assert_eq!(layout.range.end_inclusive(), Some(38));
/// assert_eq!(layout.lead_extent, 1600.0);
/// ```
#[derive(Clone, Debug)]
pub struct WindowedList<S> {
    scroll_offset: S,
    viewport_extent: S,
    row_extent: S,
    overscan_rows: usize,
    len: usize,
    cached: Option<WindowLayout<S>>,
}

impl<S: Scalar> Default for WindowedList<S> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S: Scalar> WindowedList<S> {
    /// Creates a controller over a strip of `len` rows with default
    /// extents (80-unit rows, 600-unit viewport, 5 rows of overscan).
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            scroll_offset: S::zero(),
            viewport_extent: S::from_usize(DEFAULT_VIEWPORT_EXTENT),
            row_extent: S::from_usize(DEFAULT_ROW_EXTENT),
            overscan_rows: DEFAULT_OVERSCAN_ROWS,
            len,
            cached: None,
        }
    }

    /// Creates a controller with explicit viewport and row extents.
    #[must_use]
    pub fn with_extents(len: usize, viewport_extent: S, row_extent: S) -> Self {
        let mut list = Self::new(len);
        list.viewport_extent = sanitize_extent(viewport_extent);
        list.row_extent = sanitize_row_extent(row_extent);
        list
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.scroll_offset
    }

    /// Updates the scroll offset.
    ///
    /// Safe to call on every scroll tick: the update is O(1) and layout is
    /// recomputed lazily on the next [`WindowedList::layout`] query.
    /// Negative and non-finite offsets are treated as zero.
    pub fn set_scroll_offset(&mut self, offset: S) {
        let offset = sanitize_extent(offset);
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.cached = None;
        }
    }

    /// Current viewport extent.
    #[must_use]
    pub fn viewport_extent(&self) -> S {
        self.viewport_extent
    }

    /// Updates the viewport extent (e.g. on host resize).
    pub fn set_viewport_extent(&mut self, extent: S) {
        let extent = sanitize_extent(extent);
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.cached = None;
        }
    }

    /// Current uniform row extent.
    #[must_use]
    pub fn row_extent(&self) -> S {
        self.row_extent
    }

    /// Updates the uniform row extent, clamping to a minimum of one unit.
    pub fn set_row_extent(&mut self, extent: S) {
        let extent = sanitize_row_extent(extent);
        if extent != self.row_extent {
            self.row_extent = extent;
            self.cached = None;
        }
    }

    /// Current overscan in whole rows per side.
    #[must_use]
    pub fn overscan_rows(&self) -> usize {
        self.overscan_rows
    }

    /// Updates the overscan row count.
    pub fn set_overscan_rows(&mut self, rows: usize) {
        if rows != self.overscan_rows {
            self.overscan_rows = rows;
            self.cached = None;
        }
    }

    /// Number of rows in the strip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Updates the strip length (e.g. after the host appends a page).
    ///
    /// The scroll offset is left untouched; the next layout query
    /// recomputes the range from the current offset.
    pub fn set_len(&mut self, len: usize) {
        if len != self.len {
            self.len = len;
            self.cached = None;
        }
    }

    /// Full scrollable extent of the strip.
    #[must_use]
    pub fn total_extent(&self) -> S {
        S::from_usize(self.len) * self.row_extent
    }

    /// Largest useful scroll offset: content extent minus viewport, or zero
    /// when the content fits inside the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> S {
        (self.total_extent() - self.viewport_extent).clamp_non_negative()
    }

    /// Clamps the current scroll offset into `[0, max_scroll_offset]`.
    ///
    /// Hosts typically call this after shrinking the strip so the viewport
    /// does not dangle past the content.
    pub fn clamp_scroll_offset(&mut self) {
        let clamped = self.scroll_offset.min(self.max_scroll_offset());
        self.set_scroll_offset(clamped);
    }

    /// Computes (or returns the cached) layout for the current inputs.
    pub fn layout(&mut self) -> WindowLayout<S> {
        if let Some(cached) = self.cached {
            return cached;
        }
        let range = visible_range(
            self.scroll_offset,
            self.row_extent,
            self.viewport_extent,
            self.overscan_rows,
            self.len,
        );
        let layout = WindowLayout {
            range,
            lead_extent: S::from_usize(range.start) * self.row_extent,
            rows_extent: S::from_usize(range.len()) * self.row_extent,
            tail_extent: S::from_usize(self.len - range.end) * self.row_extent,
            total_extent: self.total_extent(),
        };
        self.cached = Some(layout);
        layout
    }

    /// Iterates the realized rows of `items` for the current layout.
    ///
    /// `items` is borrowed read-only per call; if it is shorter than the
    /// strip length, iteration stops at the slice end. O(k) in the range
    /// size.
    pub fn rows<'a, T>(&mut self, items: &'a [T]) -> Rows<'a, S, T> {
        let range = self.layout().range;
        Rows {
            items,
            next: range.start.min(items.len()),
            end: range.end.min(items.len()),
            row_extent: self.row_extent,
        }
    }

    /// Like [`WindowedList::rows`], but pairs each row with a
    /// reconciliation key: the identifier `id_of` extracts when present,
    /// the row index otherwise.
    pub fn keyed_rows<'a, T, K, F>(
        &mut self,
        items: &'a [T],
        mut id_of: F,
    ) -> impl Iterator<Item = (RowKey<K>, Row<'a, S, T>)>
    where
        F: FnMut(&T) -> Option<K>,
    {
        self.rows(items)
            .map(move |row| (RowKey::from_id(id_of(row.item), row.index), row))
    }

    /// Returns `true` if `index` is fully inside the viewport (ignoring
    /// overscan).
    #[must_use]
    pub fn is_row_in_view(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let row_start = S::from_usize(index) * self.row_extent;
        let row_end = row_start + self.row_extent;
        row_start >= self.scroll_offset
            && row_end <= self.scroll_offset + self.viewport_extent
    }

    /// Scrolls so that the row at `index` lands at the requested alignment,
    /// clamped to the valid scroll range. Out-of-range indices are clamped
    /// to the last row; an empty strip is a no-op.
    pub fn scroll_to_row(&mut self, index: usize, align: ScrollAlign) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        let row_start = S::from_usize(index) * self.row_extent;
        let row_end = row_start + self.row_extent;
        let two = S::from_usize(2);

        let target = match align {
            ScrollAlign::Start => row_start,
            ScrollAlign::End => row_end - self.viewport_extent,
            ScrollAlign::Center => {
                row_start - (self.viewport_extent - self.row_extent) / two
            }
            ScrollAlign::Auto => {
                if self.is_row_in_view(index) {
                    return;
                }
                if row_start < self.scroll_offset {
                    row_start
                } else {
                    row_end - self.viewport_extent
                }
            }
        };
        self.set_scroll_offset(target.clamp_non_negative().min(self.max_scroll_offset()));
    }

    /// Snapshot of the current controller state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&mut self) -> WindowedListDebugInfo<S> {
        let layout = self.layout();
        WindowedListDebugInfo {
            scroll_offset: self.scroll_offset,
            viewport_extent: self.viewport_extent,
            row_extent: self.row_extent,
            overscan_rows: self.overscan_rows,
            len: self.len,
            layout,
        }
    }
}

/// Debug snapshot of a [`WindowedList`] state.
#[derive(Clone, Copy, Debug)]
pub struct WindowedListDebugInfo<S> {
    /// Current scroll offset.
    pub scroll_offset: S,
    /// Current viewport extent.
    pub viewport_extent: S,
    /// Current uniform row extent.
    pub row_extent: S,
    /// Overscan in whole rows per side.
    pub overscan_rows: usize,
    /// Number of rows in the strip.
    pub len: usize,
    /// Layout for the current inputs.
    pub layout: WindowLayout<S>,
}

#[cfg(test)]
mod tests {
    use super::{ScrollAlign, WindowedList};

    #[test]
    fn layout_spacers_sum_to_total_extent() {
        let mut list = WindowedList::<f64>::new(1000);
        for offset in [0.0, 550.0, 2000.0, 40_000.0, 79_400.0] {
            list.set_scroll_offset(offset);
            let layout = list.layout();
            assert_eq!(
                layout.lead_extent + layout.rows_extent + layout.tail_extent,
                layout.total_extent,
                "spacer sum broke at offset {offset}"
            );
            assert_eq!(layout.total_extent, 80_000.0);
        }
    }

    #[test]
    fn empty_strip_has_zero_spacers_and_no_rows() {
        let mut list = WindowedList::<f64>::new(0);
        let layout = list.layout();
        assert!(layout.range.is_empty());
        assert_eq!(layout.lead_extent, 0.0);
        assert_eq!(layout.tail_extent, 0.0);
        assert_eq!(layout.total_extent, 0.0);
        assert_eq!(list.rows::<u8>(&[]).count(), 0);
    }

    #[test]
    fn partial_last_page_keeps_tail_spacer_at_zero() {
        // 13 rows of 80 = 1040 total; viewport 600; scrolled to the bottom.
        let mut list = WindowedList::<f64>::with_extents(13, 600.0, 80.0);
        list.set_scroll_offset(440.0);
        let layout = list.layout();
        assert_eq!(layout.range.end, 13);
        assert_eq!(layout.tail_extent, 0.0);
        assert_eq!(
            layout.lead_extent + layout.rows_extent + layout.tail_extent,
            layout.total_extent
        );
    }

    #[test]
    fn setters_invalidate_the_cached_layout() {
        let mut list = WindowedList::<f64>::new(1000);
        let before = list.layout();

        // A viewport resize must change the range on the next query, not
        // only on scroll.
        list.set_viewport_extent(1400.0);
        let resized = list.layout();
        assert!(resized.range.end > before.range.end);

        list.set_len(5);
        let shrunk = list.layout();
        assert_eq!(shrunk.range.end, 5);
    }

    #[test]
    fn rows_are_sliced_not_scanned() {
        let items: alloc::vec::Vec<u32> = (0..1000).collect();
        let mut list = WindowedList::<f64>::new(items.len());
        list.set_scroll_offset(2000.0);

        let rows: alloc::vec::Vec<_> = list.rows(&items).collect();
        assert_eq!(rows.len(), 19);
        assert_eq!(rows[0].index, 20);
        assert_eq!(*rows[0].item, 20);
        assert_eq!(rows[0].offset, 1600.0);
        assert_eq!(rows.last().map(|row| row.index), Some(38));
    }

    #[test]
    fn keyed_rows_fall_back_to_index_for_anonymous_items() {
        use crate::RowKey;

        struct Post {
            id: Option<u64>,
        }
        let items = [Post { id: Some(9) }, Post { id: None }];
        let mut list = WindowedList::<f32>::with_extents(2, 600.0, 80.0);

        let keys: alloc::vec::Vec<_> = list
            .keyed_rows(&items, |post| post.id)
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, [RowKey::Id(9), RowKey::Index(1)]);
    }

    #[test]
    fn scroll_to_row_aligns_and_clamps() {
        let mut list = WindowedList::<f64>::new(1000);

        list.scroll_to_row(100, ScrollAlign::Start);
        assert_eq!(list.scroll_offset(), 8000.0);

        list.scroll_to_row(100, ScrollAlign::End);
        assert_eq!(list.scroll_offset(), 8080.0 - 600.0);

        list.scroll_to_row(0, ScrollAlign::Center);
        assert_eq!(list.scroll_offset(), 0.0);

        // Auto is a no-op when the row is already fully visible.
        list.set_scroll_offset(8000.0);
        list.scroll_to_row(101, ScrollAlign::Auto);
        assert_eq!(list.scroll_offset(), 8000.0);

        // Clamps to the end of the content.
        list.scroll_to_row(999, ScrollAlign::Start);
        assert_eq!(list.scroll_offset(), list.max_scroll_offset());
    }

    #[test]
    fn clamp_scroll_offset_recovers_after_shrink() {
        let mut list = WindowedList::<f64>::new(1000);
        list.set_scroll_offset(70_000.0);
        list.set_len(10);
        list.clamp_scroll_offset();
        assert_eq!(list.scroll_offset(), 200.0);
        assert!(!list.layout().range.is_empty());
    }
}
