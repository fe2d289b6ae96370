// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row views produced for realized indices.
//!
//! [`Row`] pairs a realized index with its item and its start offset in the
//! scroll axis, ready to hand to any per-item rendering strategy. Rendering
//! itself is a caller-supplied capability: any pure mapping from
//! `(item, index)` to a rendered unit works, and this crate never inspects
//! the item type.
//!
//! [`RowKey`] captures the reconciliation key convention: a stable
//! identifier when the item carries one, the row index otherwise.

use crate::Scalar;

/// A realized row: index, start offset in the scroll axis, and item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<'a, S, T> {
    /// Index of the row in the full strip.
    pub index: usize,
    /// Start offset of the row in the scroll axis.
    pub offset: S,
    /// The caller-owned item backing this row.
    pub item: &'a T,
}

/// Reconciliation key for a realized row.
///
/// Hosts that diff realized children across frames should key rows by a
/// stable item identifier when one exists, falling back to the row index
/// for anonymous items. Index keys are only stable while the strip does
/// not reorder, which is why identifiers win when present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKey<K> {
    /// Stable identifier carried by the item itself.
    Id(K),
    /// Positional fallback for items without an identifier.
    Index(usize),
}

impl<K> RowKey<K> {
    /// Builds a key from an optional item identifier with index fallback.
    #[must_use]
    pub fn from_id(id: Option<K>, index: usize) -> Self {
        match id {
            Some(id) => Self::Id(id),
            None => Self::Index(index),
        }
    }
}

/// Iterator over the realized rows of a strip slice.
///
/// Yields one [`Row`] per index in the visible range, in index order.
/// Construction is O(1) and iteration is O(k) in the range size, never
/// O(len) of the full strip.
#[derive(Clone, Debug)]
pub struct Rows<'a, S, T> {
    pub(crate) items: &'a [T],
    pub(crate) next: usize,
    pub(crate) end: usize,
    pub(crate) row_extent: S,
}

impl<'a, S: Scalar, T> Iterator for Rows<'a, S, T> {
    type Item = Row<'a, S, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        let item = self.items.get(index)?;
        self.next += 1;
        Some(Row {
            index,
            offset: S::from_usize(index) * self.row_extent,
            item,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<S: Scalar, T> ExactSizeIterator for Rows<'_, S, T> {}
