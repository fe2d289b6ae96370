// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce: fire once after a burst goes quiet.
//!
//! ## Usage
//!
//! 1) Call [`Debounce::observe`] with the current timestamp on every event
//!    in the stream being coalesced.
//! 2) Poll [`Debounce::fire`] with the current timestamp (on a tick or the
//!    next event); it answers `true` once per burst, after the quiet
//!    period has elapsed since the last observation.
//!
//! ## Minimal example
//!
//! ```
//! use windrow_event_rate::Debounce;
//!
//! let mut debounce = Debounce::new(100.0_f64);
//!
//! debounce.observe(0.0);
//! debounce.observe(60.0); // burst continues, window restarts
//! assert!(!debounce.fire(120.0)); // only 60 quiet units
//! assert!(debounce.fire(200.0)); // 140 quiet units: fire
//! assert!(!debounce.fire(300.0)); // already fired for this burst
//! ```

use windrow_virtual_list::Scalar;

/// Trailing-edge debounce over host-supplied monotonic timestamps.
///
/// Timer-free: the host owns the clock and polls. Timestamps are in any
/// consistent unit; they only need to be monotonic per instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Debounce<S> {
    delay: S,
    last_activity: Option<S>,
}

impl<S: Scalar> Debounce<S> {
    /// Creates a debounce with the given quiet period.
    ///
    /// Negative or non-finite quiet periods are clamped to zero (fire on
    /// the first poll after an observation).
    #[must_use]
    pub fn new(delay: S) -> Self {
        let delay = if delay.is_finite() {
            delay.clamp_non_negative()
        } else {
            S::zero()
        };
        Self {
            delay,
            last_activity: None,
        }
    }

    /// Quiet period required before firing.
    #[must_use]
    pub fn delay(&self) -> S {
        self.delay
    }

    /// Records one event of the burst at time `now`, restarting the quiet
    /// window.
    pub fn observe(&mut self, now: S) {
        self.last_activity = Some(now);
    }

    /// Returns `true` if the quiet period has elapsed since the last
    /// observation. Latches: fires at most once per burst.
    pub fn fire(&mut self, now: S) -> bool {
        match self.last_activity {
            Some(last) if now - last >= self.delay => {
                self.last_activity = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a burst is pending (observed but not fired).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_activity.is_some()
    }

    /// Drops any pending burst without firing.
    pub fn cancel(&mut self) {
        self.last_activity = None;
    }
}
