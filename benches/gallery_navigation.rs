// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the pure gallery domain.
//!
//! Measures the performance of:
//! - Overlay navigation (wraparound stepping)
//! - Description tier classification
//! - Restricted markup parsing

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::gallery::markup;
use iced_gallery::gallery::navigator::{self, State};
use iced_gallery::gallery::DescriptionTier;
use std::hint::black_box;

/// Benchmark modal stepping with wraparound over a large collection.
fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_with_wraparound", |b| {
        let mut state = State::default();
        state.handle(navigator::Message::CollectionChanged(500));
        state.handle(navigator::Message::Open(0));

        b.iter(|| {
            state.handle(navigator::Message::Next);
            black_box(state.info());
        });
    });

    group.bench_function("full_cycle", |b| {
        b.iter(|| {
            let mut state = State::default();
            state.handle(navigator::Message::CollectionChanged(100));
            state.handle(navigator::Message::Open(0));
            for _ in 0..100 {
                state.handle(navigator::Message::Next);
            }
            black_box(state.info());
        });
    });

    group.finish();
}

/// Benchmark description tier classification on long multibyte text.
fn bench_tier_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("description_tier");

    let ascii = "a".repeat(600);
    let multibyte = "あ".repeat(600);

    group.bench_function("ascii", |b| {
        b.iter(|| black_box(DescriptionTier::for_description(&ascii)));
    });

    group.bench_function("multibyte", |b| {
        b.iter(|| black_box(DescriptionTier::for_description(&multibyte)));
    });

    group.finish();
}

/// Benchmark the restricted markup parser on link-heavy text.
fn bench_markup_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_parse");

    let plain = "This description has no links at all, just prose. ".repeat(10);
    let linked = "See [the repo](https://example.test/repo) and [docs](https://example.test/docs). "
        .repeat(10);

    group.bench_function("plain_text", |b| {
        b.iter(|| black_box(markup::parse(&plain)));
    });

    group.bench_function("link_heavy", |b| {
        b.iter(|| black_box(markup::parse(&linked)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_navigation,
    bench_tier_classification,
    bench_markup_parse
);
criterion_main!(benches);
