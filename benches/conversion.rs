use std::hint::black_box;

use amlich::calendar::MonthView;
use amlich::lunar::ephemeris::new_moon;
use amlich::{lunar_to_solar, solar_to_lunar};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_new_moon(c: &mut Criterion) {
    c.bench_function("new_moon", |b| {
        b.iter(|| {
            for k in 0..1000 {
                black_box(new_moon(black_box(k)));
            }
        });
    });
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(10), black_box(2), black_box(2024)));
    });
    group.bench_function("lunar_to_solar", |b| {
        b.iter(|| lunar_to_solar(black_box(15), black_box(8), black_box(2024), false));
    });
    group.bench_function("month_view", |b| {
        b.iter(|| MonthView::new(black_box(2), black_box(2024)));
    });

    group.finish();
}

criterion_group!(benches, bench_new_moon, bench_conversions);
criterion_main!(benches);
