// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-geometry probes and caller-owned feed flags.

use windrow_virtual_list::Scalar;

/// One sample of a scroll container's geometry.
///
/// Mirrors the three values every scroll surface can report: the current
/// offset from the top, the full content extent, and the visible extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProbe<S> {
    /// Scroll offset from the top of the content.
    pub scroll_top: S,
    /// Full extent of the scrollable content.
    pub scroll_height: S,
    /// Extent of the visible viewport.
    pub client_height: S,
}

impl<S: Scalar> ScrollProbe<S> {
    /// Creates a probe from one scroll event's geometry.
    #[must_use]
    pub fn new(scroll_top: S, scroll_height: S, client_height: S) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Remaining extent below the viewport, clamped non-negative.
    ///
    /// `scroll_height - scroll_top - client_height`; overscrolled or
    /// inconsistent geometry reads as zero distance (at the bottom).
    #[must_use]
    pub fn distance_to_bottom(&self) -> S {
        (self.scroll_height - self.scroll_top - self.client_height).clamp_non_negative()
    }
}

/// Caller-owned fetch flags, passed in read-only on every query.
///
/// This crate never mutates these: the caller flips `is_loading` before
/// starting its asynchronous fetch and updates `has_more` (and appends
/// items) once the fetch resolves. A fetch that never resolves leaves
/// `is_loading` set and permanently blocks further triggers; avoiding
/// that (e.g. with a caller-side timeout) is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedPhase {
    /// More pages exist beyond the items currently loaded.
    pub has_more: bool,
    /// A fetch is currently in flight.
    pub is_loading: bool,
}

impl Default for FeedPhase {
    fn default() -> Self {
        Self {
            has_more: true,
            is_loading: false,
        }
    }
}

impl FeedPhase {
    /// Creates the flags explicitly.
    #[must_use]
    pub fn new(has_more: bool, is_loading: bool) -> Self {
        Self {
            has_more,
            is_loading,
        }
    }
}

/// What a feed should append after its last loaded item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TailIndicator {
    /// Nothing; the feed is idle with more content available.
    Hidden,
    /// A fetch is in flight; show a loading affordance.
    Loading,
    /// The feed is exhausted; show a terminal "no more items" affordance.
    EndOfFeed,
}

impl TailIndicator {
    /// Picks the indicator for the given flags and loaded item count.
    ///
    /// `Loading` wins while a fetch is in flight; `EndOfFeed` only shows
    /// for a non-empty exhausted feed (an empty feed is the host's
    /// empty-state, not a tail).
    #[must_use]
    pub fn for_feed(phase: FeedPhase, len: usize) -> Self {
        if phase.is_loading {
            Self::Loading
        } else if !phase.has_more && len > 0 {
            Self::EndOfFeed
        } else {
            Self::Hidden
        }
    }
}
