// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Infinite Scroll: load-more core for paged feeds.
//!
//! This crate decides *when* a plain (non-windowed) feed should request its
//! next page. It owns no items, performs no fetches, and runs no timers;
//! the host samples its scroll container, asks [`InfiniteList::should_load`],
//! and fires its own load-more signal when the answer is `true`.
//!
//! The core concepts are:
//!
//! - [`ScrollProbe`]: one sample of scroll geometry (offset, content
//!   extent, viewport extent) with its derived distance to the bottom.
//! - [`FeedPhase`]: the caller-owned `{has_more, is_loading}` flags, read
//!   but never mutated here. The caller flips `is_loading` before its
//!   asynchronous fetch and updates `has_more`/appends items after it
//!   resolves.
//! - [`InfiniteList`]: the threshold-owning controller; fires iff the
//!   probe is within the threshold of the bottom, more pages exist, and
//!   no fetch is in flight.
//! - [`TailIndicator`]: what to append after the last item — a loading
//!   affordance while fetching, a terminal marker for a non-empty
//!   exhausted feed.
//! - [`ThresholdCrossing`]: an optional latch giving
//!   once-per-zone-entry semantics to hosts without a debounce layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use windrow_infinite_scroll::{FeedPhase, InfiniteList, ScrollProbe, TailIndicator};
//!
//! let feed = InfiniteList::<f64>::default(); // 100-unit threshold
//! let mut phase = FeedPhase::default();
//! let mut items: Vec<u32> = (0..20).collect();
//!
//! // A scroll sample 50 units from the bottom.
//! let probe = ScrollProbe::new(550.0, 1000.0, 400.0);
//! if feed.should_load(probe, phase) {
//!     // Host kicks off its fetch and flips the flag itself.
//!     phase.is_loading = true;
//! }
//! assert_eq!(TailIndicator::for_feed(phase, items.len()), TailIndicator::Loading);
//!
//! // ... fetch resolves: append the page and clear the flag.
//! items.extend(20..40);
//! phase.is_loading = false;
//! ```
//!
//! Failure semantics: a fetch that throws is the host's to handle, and a
//! fetch that never resolves leaves `is_loading` set, permanently blocking
//! further triggers; guarding against that (timeouts, retry policy) is
//! host responsibility. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod probe;
mod trigger;

pub use probe::{FeedPhase, ScrollProbe, TailIndicator};
pub use trigger::{DEFAULT_THRESHOLD, InfiniteList, ThresholdCrossing};
