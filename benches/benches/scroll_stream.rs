// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use windrow_event_rate::Throttle;
use windrow_infinite_scroll::{FeedPhase, InfiniteList, ScrollProbe};

fn bench_scroll_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("windrow_infinite_scroll");

    group.bench_function("should_load", |b| {
        let feed = InfiniteList::<f64>::default();
        let phase = FeedPhase::default();
        let mut scroll_top = 0.0_f64;
        b.iter(|| {
            scroll_top = (scroll_top + 7.0) % 600.0;
            let probe = ScrollProbe::new(black_box(scroll_top), 1000.0, 400.0);
            black_box(feed.should_load(probe, phase))
        });
    });

    group.bench_function("throttled_should_load", |b| {
        let feed = InfiniteList::<f64>::default();
        let phase = FeedPhase::default();
        let mut throttle = Throttle::new(16.0_f64);
        let mut now = 0.0_f64;
        b.iter(|| {
            now += 1.0;
            if throttle.allow(now) {
                let probe = ScrollProbe::new(black_box(now % 600.0), 1000.0, 400.0);
                black_box(feed.should_load(probe, phase));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scroll_stream);
criterion_main!(benches);
