// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-range math for a dense strip of uniform rows.
//!
//! [`visible_range`] is the pure core of this crate: it maps a scroll offset,
//! uniform row extent, viewport extent, and row-count overscan to the
//! half-open index range `[start, end)` a host should realize. It has no
//! side effects and is re-derivable identically from the same inputs, so
//! hosts may memoize it keyed on the input tuple.

use core::ops::RangeInclusive;

use crate::Scalar;

/// A half-open range of row indices: `[start, end)`.
///
/// An empty range (`start == end`) means "realize nothing". Hosts that
/// prefer inclusive bounds can use [`VisibleRange::end_inclusive`] or
/// [`VisibleRange::as_inclusive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleRange {
    /// First index to realize.
    pub start: usize,
    /// One past the last index to realize.
    pub end: usize,
}

impl VisibleRange {
    /// The empty range.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Returns `true` if the range contains no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of rows in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// The last index in the range (inclusive), or `None` if empty.
    #[must_use]
    pub fn end_inclusive(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Converts to an inclusive range, or `None` if empty.
    #[must_use]
    pub fn as_inclusive(&self) -> Option<RangeInclusive<usize>> {
        Some(self.start..=self.end_inclusive()?)
    }

    /// Returns `true` if `index` falls inside the range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Computes the range of rows to realize for the given viewport state.
///
/// The returned range covers every row that intersects the viewport
/// `[scroll_offset, scroll_offset + viewport_extent)`, widened by
/// `overscan_rows` whole rows on each side and clamped to `[0, len)`:
///
/// - `start = max(0, floor(scroll_offset / row_extent) - overscan_rows)`
/// - last realized index
///   `= min(len - 1, ceil((scroll_offset + viewport_extent) / row_extent) + overscan_rows)`
///
/// `len == 0` yields [`VisibleRange::EMPTY`]. Non-finite or negative
/// `scroll_offset`/`viewport_extent` are treated as zero, and a row extent
/// that is not at least one unit is clamped up to one, so the function never
/// panics on malformed input. A scroll offset beyond the end of the content
/// yields an empty range positioned at `len`.
///
/// Holding the other inputs fixed, a larger `scroll_offset` never produces
/// a smaller `start`.
#[must_use]
pub fn visible_range<S: Scalar>(
    scroll_offset: S,
    row_extent: S,
    viewport_extent: S,
    overscan_rows: usize,
    len: usize,
) -> VisibleRange {
    if len == 0 {
        return VisibleRange::EMPTY;
    }

    let row = sanitize_row_extent(row_extent);
    let offset = sanitize_extent(scroll_offset);
    let viewport = sanitize_extent(viewport_extent);
    let overscan = overscan_rows as isize;

    let first_in_view = (offset / row).floor_to_isize();
    let last_in_view = ((offset + viewport) / row).ceil_to_isize();

    let end = usize::try_from(last_in_view.saturating_add(overscan).saturating_add(1))
        .unwrap_or(0)
        .min(len);
    let start = usize::try_from(first_in_view.saturating_sub(overscan))
        .unwrap_or(0)
        .min(end);

    VisibleRange { start, end }
}

/// Replaces non-finite values with zero and clamps negatives to zero.
pub(crate) fn sanitize_extent<S: Scalar>(value: S) -> S {
    if value.is_finite() {
        value.clamp_non_negative()
    } else {
        S::zero()
    }
}

/// Clamps a row extent to a safe minimum of one unit.
pub(crate) fn sanitize_row_extent<S: Scalar>(value: S) -> S {
    let one = S::from_usize(1);
    if value.is_finite() { value.max(one) } else { one }
}
