use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_search::catalog::{generate_level, LevelCatalog};
use word_search::core::{cells_between_into, generate_grid, Line, PackSeed};
use word_search::engine::GameSession;
use word_search::types::{Coord, Language};

fn bench_pack_easy(c: &mut Criterion) {
    let level = generate_level(1, Language::En);

    c.bench_function("pack_4x4_3_words", |b| {
        b.iter(|| generate_grid(level.grid_size, black_box(&level.words), PackSeed::Fixed(1)))
    });
}

fn bench_pack_expert(c: &mut Criterion) {
    let level = generate_level(50, Language::En);

    c.bench_function("pack_8x8_8_words", |b| {
        b.iter(|| generate_grid(level.grid_size, black_box(&level.words), PackSeed::Fixed(50)))
    });
}

fn bench_generate_level(c: &mut Criterion) {
    c.bench_function("generate_level", |b| {
        b.iter(|| generate_level(black_box(777), Language::Es))
    });
}

fn bench_cells_between(c: &mut Criterion) {
    let mut line = Line::new();

    c.bench_function("cells_between_diagonal", |b| {
        b.iter(|| {
            cells_between_into(black_box(Coord::new(7, 0)), black_box(Coord::new(0, 7)), &mut line);
        })
    });
}

fn bench_submit_selection(c: &mut Criterion) {
    let catalog = LevelCatalog::new();
    let mut session = GameSession::new();
    session.start(&catalog, 45, Language::En).unwrap();
    // A miss keeps the session unchanged between iterations
    let miss = [Coord::new(0, 0), Coord::new(1, 1)];

    c.bench_function("submit_selection_miss", |b| {
        b.iter(|| session.submit_selection(black_box(&miss)))
    });
}

criterion_group!(
    benches,
    bench_pack_easy,
    bench_pack_expert,
    bench_generate_level,
    bench_cells_between,
    bench_submit_selection
);
criterion_main!(benches);
