// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Event Rate: host-driven event-stream coalescing.
//!
//! Small state machines for rate-limiting high-frequency UI event streams
//! (typically scroll ticks) in front of the windowing and load-more cores:
//!
//! - [`Debounce`]: trailing-edge; fires once after a burst goes quiet.
//! - [`Throttle`]: leading-edge; passes at most one event per interval.
//!
//! Both are timer-free and callback-free: the host supplies monotonic
//! timestamps (any consistent unit) and decides what to run when a poll
//! answers `true`. No background threads, no suspension, no queueing —
//! events are considered in the order the host delivers them. This crate
//! is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
