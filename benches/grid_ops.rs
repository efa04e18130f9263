use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockwars::core::{detect_matches, GridOrchestrator};
use blockwars::engine::{apply_spawns, Session};
use blockwars::types::GridSnapshot;

fn bench_prepare_fill(c: &mut Criterion) {
    let mut engine = GridOrchestrator::new();
    engine.set_row_count(12);
    engine.set_column_count(12);
    let empty = GridSnapshot::default();

    c.bench_function("prepare_fill_12x12", |b| {
        b.iter(|| engine.prepare_fill(black_box(&empty)))
    });
}

fn bench_compaction(c: &mut Criterion) {
    let mut engine = GridOrchestrator::new();
    engine.set_row_count(12);
    engine.set_column_count(12);
    // Checkerboard of holes
    let rows: Vec<Vec<&str>> = (0..12)
        .map(|r| {
            (0..12)
                .map(|col| if (r + col) % 2 == 0 { "red" } else { "" })
                .collect()
        })
        .collect();
    let snap = GridSnapshot::from_keys(&rows);

    c.bench_function("compaction_moves_12x12", |b| {
        b.iter(|| engine.compaction_moves(black_box(&snap)))
    });
}

fn bench_detect_matches(c: &mut Criterion) {
    let mut engine = GridOrchestrator::new();
    engine.set_row_count(12);
    engine.set_column_count(12);
    let mut grid = engine.working_copy(&GridSnapshot::default());
    let plan = engine.prepare_fill(&GridSnapshot::default());
    let _ = apply_spawns(&mut grid, &plan);

    c.bench_function("detect_matches_12x12", |b| {
        b.iter(|| detect_matches(black_box(&grid)))
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_6x6", |b| {
        b.iter(|| {
            let mut session = Session::new(GridOrchestrator::new());
            session.settle(black_box(32))
        })
    });
}

criterion_group!(
    benches,
    bench_prepare_fill,
    bench_compaction,
    bench_detect_matches,
    bench_settle
);
criterion_main!(benches);
