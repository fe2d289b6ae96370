// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load-more gating for an infinite feed.

use windrow_virtual_list::Scalar;

use crate::probe::{FeedPhase, ScrollProbe};

/// Default trigger threshold, in scroll-axis units from the bottom.
pub const DEFAULT_THRESHOLD: usize = 100;

/// Decides when a feed should request its next page.
///
/// The controller owns only the trigger threshold; items and fetch flags
/// stay with the caller. [`InfiniteList::should_load`] answers for one
/// scroll sample: `true` iff the viewport bottom is within `threshold` of
/// the content bottom, more pages exist, and no fetch is in flight. The
/// `is_loading` flag in [`FeedPhase`] is the only built-in guard against
/// duplicate requests; while a scroll stream stays inside the threshold
/// zone, every sample with an idle phase answers `true`. Hosts that want
/// one signal per zone entry can layer [`ThresholdCrossing`] (or an
/// event-rate wrapper) on top without changing this contract.
///
/// The controller never runs, awaits, or intercepts the caller's fetch:
/// it answers the question and nothing else, so fetch failures propagate
/// through the caller's own error handling and retry policy.
///
/// ```
/// use windrow_infinite_scroll::{FeedPhase, InfiniteList, ScrollProbe};
///
/// let feed = InfiniteList::<f64>::new(100.0);
/// let probe = ScrollProbe::new(550.0, 1000.0, 400.0); // 50 from the bottom
///
/// assert!(feed.should_load(probe, FeedPhase::new(true, false)));
/// // In flight: the same position triggers nothing.
/// assert!(!feed.should_load(probe, FeedPhase::new(true, true)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfiniteList<S> {
    threshold: S,
}

impl<S: Scalar> Default for InfiniteList<S> {
    fn default() -> Self {
        Self::new(S::from_usize(DEFAULT_THRESHOLD))
    }
}

impl<S: Scalar> InfiniteList<S> {
    /// Creates a controller with the given trigger threshold.
    ///
    /// Negative or non-finite thresholds are clamped to zero (trigger only
    /// exactly at the bottom).
    #[must_use]
    pub fn new(threshold: S) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp_non_negative()
        } else {
            S::zero()
        };
        Self { threshold }
    }

    /// Current trigger threshold.
    #[must_use]
    pub fn threshold(&self) -> S {
        self.threshold
    }

    /// Returns `true` if this scroll sample should fire the caller's
    /// load-more signal.
    #[must_use]
    pub fn should_load(&self, probe: ScrollProbe<S>, phase: FeedPhase) -> bool {
        phase.has_more
            && !phase.is_loading
            && probe.distance_to_bottom() < self.threshold
    }

    /// Returns `true` if the probe is inside the threshold zone,
    /// regardless of feed phase.
    #[must_use]
    pub fn in_zone(&self, probe: ScrollProbe<S>) -> bool {
        probe.distance_to_bottom() < self.threshold
    }
}

/// Latches threshold-zone entry so a burst of scroll samples inside the
/// zone yields a single signal.
///
/// The latch arms on creation, fires on the first in-zone sample, and
/// re-arms once a sample lands outside the zone again. This is an
/// optional convenience for hosts without their own debounce layer; the
/// `is_loading` guard in [`InfiniteList::should_load`] remains the
/// authoritative duplicate-request gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThresholdCrossing {
    fired: bool,
}

impl ThresholdCrossing {
    /// Creates an armed latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one sample's zone membership; returns `true` exactly once
    /// per contiguous run of in-zone samples.
    pub fn observe(&mut self, in_zone: bool) -> bool {
        if in_zone {
            if self.fired {
                false
            } else {
                self.fired = true;
                true
            }
        } else {
            self.fired = false;
            false
        }
    }

    /// Re-arms the latch without waiting for an out-of-zone sample.
    ///
    /// Hosts call this after a page lands if they want the very next
    /// in-zone sample to fire again (the zone may still contain the
    /// viewport when short pages arrive).
    pub fn rearm(&mut self) {
        self.fired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{InfiniteList, ThresholdCrossing};
    use crate::probe::{FeedPhase, ScrollProbe};

    #[test]
    fn fires_inside_threshold_when_idle() {
        let feed = InfiniteList::<f64>::default();
        let probe = ScrollProbe::new(550.0, 1000.0, 400.0);
        assert!(feed.should_load(probe, FeedPhase::new(true, false)));
    }

    #[test]
    fn in_flight_fetch_blocks_retrigger_at_same_position() {
        let feed = InfiniteList::<f64>::default();
        let probe = ScrollProbe::new(550.0, 1000.0, 400.0);
        assert!(feed.should_load(probe, FeedPhase::new(true, false)));
        assert!(!feed.should_load(probe, FeedPhase::new(true, true)));
    }

    #[test]
    fn exhausted_feed_never_fires() {
        let feed = InfiniteList::<f64>::default();
        let probe = ScrollProbe::new(600.0, 1000.0, 400.0);
        assert!(!feed.should_load(probe, FeedPhase::new(false, false)));
    }

    #[test]
    fn distance_equal_to_threshold_does_not_fire() {
        // distance 100 with threshold 100: strictly-less comparison.
        let feed = InfiniteList::<f64>::default();
        let probe = ScrollProbe::new(500.0, 1000.0, 400.0);
        assert!(!feed.should_load(probe, FeedPhase::new(true, false)));
    }

    #[test]
    fn malformed_threshold_clamps_to_zero() {
        let feed = InfiniteList::new(-25.0_f64);
        assert_eq!(feed.threshold(), 0.0);
        // Zero threshold can never fire: distance is clamped non-negative.
        let bottom = ScrollProbe::new(600.0, 1000.0, 400.0);
        assert!(!feed.should_load(bottom, FeedPhase::new(true, false)));
    }

    #[test]
    fn crossing_latch_fires_once_per_zone_entry() {
        let mut latch = ThresholdCrossing::new();
        // Scroll tick stream: out, in, in, in, out, in.
        let samples = [false, true, true, true, false, true];
        let fires: alloc::vec::Vec<bool> =
            samples.iter().map(|&s| latch.observe(s)).collect();
        assert_eq!(fires, [false, true, false, false, false, true]);
    }

    #[test]
    fn rearm_allows_back_to_back_pages() {
        let mut latch = ThresholdCrossing::new();
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        latch.rearm();
        assert!(latch.observe(true));
    }
}
