// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use windrow_virtual_list::{WindowedList, visible_range};

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("windrow_virtual_list");

    // Range math must stay flat in strip length to be safe on every
    // scroll tick.
    for &len in &[1_000_usize, 100_000, 10_000_000] {
        group.bench_function(format!("visible_range(len={len})"), |b| {
            let mut offset = 0.0_f64;
            b.iter(|| {
                offset = (offset + 163.0) % (len as f64 * 80.0);
                black_box(visible_range(black_box(offset), 80.0, 600.0, 5, len))
            });
        });
    }

    group.bench_function("layout_cached_hit", |b| {
        let mut list = WindowedList::<f64>::new(100_000);
        list.set_scroll_offset(40_000.0);
        let _ = list.layout();
        b.iter(|| black_box(list.layout()));
    });

    group.bench_function("scroll_then_layout", |b| {
        let mut list = WindowedList::<f64>::new(100_000);
        let mut offset = 0.0_f64;
        b.iter(|| {
            offset = (offset + 37.0) % 1_000_000.0;
            list.set_scroll_offset(offset);
            black_box(list.layout())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_visible_range);
criterion_main!(benches);
