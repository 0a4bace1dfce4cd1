//! Benchmarks for the storyboard store.
//!
//! Run with: cargo bench

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reelboard::{Frame, FramePatch, StoryboardStore, VisualStyle};

fn board_of(n: usize) -> StoryboardStore {
    let mut store = StoryboardStore::new();
    for i in 0..n {
        store
            .append(Frame::new(format!("f-{}", i)).with_scene(format!("Scene {}", i)))
            .unwrap();
    }
    store
}

fn bench_new(c: &mut Criterion) {
    c.bench_function("new", |b| b.iter(|| black_box(StoryboardStore::new())));
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append", |b| {
        let mut store = StoryboardStore::new();
        let mut i = 0u64;
        b.iter(|| {
            store
                .append(Frame::new(format!("f-{}", i)).with_scene("Benchmark Scene"))
                .unwrap();
            i += 1;
        })
    });
}

fn bench_reorder(c: &mut Criterion) {
    c.bench_function("reorder_100", |b| {
        let mut store = board_of(100);
        let mut i = 0usize;
        b.iter(|| {
            let id = format!("f-{}", i % 100);
            store.reorder(&id, (i * 37) % 100).unwrap();
            i += 1;
        })
    });
}

fn bench_duplicate_and_remove(c: &mut Criterion) {
    c.bench_function("duplicate_then_remove_100", |b| {
        let mut store = board_of(100);
        b.iter(|| {
            let id = store.duplicate("f-50").unwrap();
            store.remove(&id).unwrap();
        })
    });
}

fn bench_bulk_update(c: &mut Criterion) {
    c.bench_function("bulk_update_25_of_100", |b| {
        let mut store = board_of(100);
        let ids: HashSet<String> = (0..25).map(|i| format!("f-{}", i * 4)).collect();
        let patch = FramePatch::new()
            .with_visual_style(VisualStyle::Bold)
            .with_description("Restyled in bulk");
        b.iter(|| {
            store.bulk_update(black_box(&ids), black_box(&patch));
        })
    });
}

fn bench_snapshot_cold(c: &mut Criterion) {
    c.bench_function("snapshot_cold_100", |b| {
        let mut store = board_of(100);
        b.iter(|| {
            // Force a rebuild each round.
            store.toggle_multi_select("f-0", true);
            black_box(store.snapshot());
        })
    });
}

fn bench_snapshot_cached(c: &mut Criterion) {
    c.bench_function("snapshot_cached_100", |b| {
        let mut store = board_of(100);
        store.snapshot();
        b.iter(|| black_box(store.snapshot()))
    });
}

criterion_group!(
    benches,
    bench_new,
    bench_append,
    bench_reorder,
    bench_duplicate_and_remove,
    bench_bulk_update,
    bench_snapshot_cold,
    bench_snapshot_cached,
);
criterion_main!(benches);
