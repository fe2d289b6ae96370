// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated feed: a windowed list over a paged item source.
//!
//! Drives a `WindowedList` with a synthetic scroll stream, throttles the
//! ticks, and lets the load-more trigger grow the feed as the viewport
//! nears the bottom. Prints what a host renderer would realize each frame.

use windrow_event_rate::Throttle;
use windrow_infinite_scroll::{FeedPhase, InfiniteList, ScrollProbe, TailIndicator};
use windrow_virtual_list::WindowedList;

const PAGE_LEN: usize = 50;
const TOTAL_PAGES: usize = 4;

fn fetch_page(page: usize) -> Vec<String> {
    (0..PAGE_LEN)
        .map(|i| format!("post #{}", page * PAGE_LEN + i))
        .collect()
}

fn main() {
    let mut items = fetch_page(0);
    let mut phase = FeedPhase::default();
    let mut pages_loaded = 1;

    let mut list = WindowedList::<f64>::new(items.len());
    let feed = InfiniteList::<f64>::default();
    let mut throttle = Throttle::new(16.0);

    // One simulated scroll tick per millisecond, 30 units per tick.
    for tick in 0..1200_u32 {
        let now = f64::from(tick);
        if !throttle.allow(now) {
            continue;
        }

        list.set_scroll_offset(f64::from(tick) * 30.0);
        list.clamp_scroll_offset();

        let probe = ScrollProbe::new(
            list.scroll_offset(),
            list.total_extent(),
            list.viewport_extent(),
        );
        if feed.should_load(probe, phase) {
            phase.is_loading = true;
            println!("tick {tick:>4}: fetching page {pages_loaded}...");

            // The "async" fetch resolves immediately in this simulation.
            items.extend(fetch_page(pages_loaded));
            pages_loaded += 1;
            phase = FeedPhase::new(pages_loaded < TOTAL_PAGES, false);
            list.set_len(items.len());
        }

        let layout = list.layout();
        let realized: Vec<&str> = list
            .rows(&items)
            .map(|row| row.item.as_str())
            .collect();
        println!(
            "tick {tick:>4}: offset {:>7.0} rows {:>3}..{:<3} ({} realized of {})",
            list.scroll_offset(),
            layout.range.start,
            layout.range.end,
            realized.len(),
            items.len(),
        );
    }

    match TailIndicator::for_feed(phase, items.len()) {
        TailIndicator::EndOfFeed => println!("-- end of feed ({} posts) --", items.len()),
        TailIndicator::Loading => println!("-- still loading --"),
        TailIndicator::Hidden => println!("-- more available --"),
    }
}
