// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge throttle: pass at most one event per interval.
//!
//! ## Minimal example
//!
//! ```
//! use windrow_event_rate::Throttle;
//!
//! let mut throttle = Throttle::new(100.0_f64);
//!
//! assert!(throttle.allow(0.0)); // leading edge passes
//! assert!(!throttle.allow(40.0)); // inside the interval
//! assert!(throttle.allow(100.0)); // interval elapsed
//! ```

use windrow_virtual_list::Scalar;

/// Leading-edge throttle over host-supplied monotonic timestamps.
///
/// The first event passes immediately; later events pass only once the
/// interval has elapsed since the last passed event. Suitable for taming
/// a high-frequency scroll stream in front of range/threshold queries
/// without changing their contracts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Throttle<S> {
    interval: S,
    last_passed: Option<S>,
}

impl<S: Scalar> Throttle<S> {
    /// Creates a throttle with the given minimum interval between passes.
    ///
    /// Negative or non-finite intervals are clamped to zero (pass
    /// everything).
    #[must_use]
    pub fn new(interval: S) -> Self {
        let interval = if interval.is_finite() {
            interval.clamp_non_negative()
        } else {
            S::zero()
        };
        Self {
            interval,
            last_passed: None,
        }
    }

    /// Minimum interval between passed events.
    #[must_use]
    pub fn interval(&self) -> S {
        self.interval
    }

    /// Returns `true` if an event at time `now` may pass.
    pub fn allow(&mut self, now: S) -> bool {
        let pass = match self.last_passed {
            None => true,
            Some(last) => now - last >= self.interval,
        };
        if pass {
            self.last_passed = Some(now);
        }
        pass
    }

    /// Forgets the last passed event so the next one passes immediately.
    pub fn reset(&mut self) {
        self.last_passed = None;
    }
}
