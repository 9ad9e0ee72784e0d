//! Benchmarks for placement.
//!
//! # Benchmarks
//!
//! - **`auto_place`**: Places a fixed word list on empty grids of increasing size.
//! - **`can_place`**: Checks a legal crossing and an illegal conflicting placement against a
//!   partially filled grid.
//! - **`find_intersections`**: Enumerates intersection candidates between two long words.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench auto_place
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use crosslace_core::{Direction, Position, Word, WordId};
use crosslace_placement::{Puzzle, WordEntry, can_place, find_intersections};

const ENTRIES: [(&str, &str); 12] = [
    ("ASTRONOMY", "Study of celestial objects"),
    ("TELESCOPE", "Instrument for viewing distant things"),
    ("PLANET", "Mars or Venus, for one"),
    ("COMET", "Icy visitor with a glowing tail"),
    ("ORBIT", "Path around a star"),
    ("NEBULA", "Cloud where stars are born"),
    ("GALAXY", "The Milky Way, for one"),
    ("METEOR", "Shooting star"),
    ("ECLIPSE", "When the moon hides the sun"),
    ("SATURN", "Ringed giant"),
    ("VENUS", "Second rock from the sun"),
    ("STAR", "Our sun is one"),
];

fn entries() -> Vec<WordEntry> {
    ENTRIES
        .iter()
        .map(|(text, clue)| WordEntry::new(*text, *clue))
        .collect()
}

fn bench_auto_place(c: &mut Criterion) {
    let entries = entries();

    for size in [9, 15, 25] {
        let puzzle = Puzzle::new(size, size).unwrap();
        c.bench_with_input(
            BenchmarkId::new("auto_place", format!("{size}x{size}")),
            &puzzle,
            |b, puzzle| {
                b.iter_batched_ref(
                    || hint::black_box(puzzle.clone()),
                    |puzzle| {
                        let outcome = puzzle.auto_place(&entries);
                        hint::black_box(outcome)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_can_place(c: &mut Criterion) {
    let mut puzzle = Puzzle::new(15, 15).unwrap();
    puzzle.auto_place(&entries());
    let grid = puzzle.grid();
    let anchor = puzzle
        .words()
        .iter()
        .next()
        .map(|word| (word.start(), word.direction()))
        .unwrap();

    let cases = [
        ("crossing", "ASTRONOMY", anchor.0, anchor.1.perpendicular()),
        ("conflict", "ZZZZZZZZZ", anchor.0, anchor.1),
    ];
    for (param, text, start, direction) in cases {
        c.bench_with_input(
            BenchmarkId::new("can_place", param),
            &(text, start, direction),
            |b, &(text, start, direction)| {
                b.iter(|| can_place(grid, hint::black_box(text), start, direction));
            },
        );
    }
}

fn bench_find_intersections(c: &mut Criterion) {
    let existing = Word::new(
        WordId::new(1),
        "ASTRONOMY",
        "",
        Direction::Horizontal,
        Position::new(7, 3),
    )
    .unwrap();

    for text in ["TELESCOPE", "CONSTELLATIONS"] {
        c.bench_with_input(
            BenchmarkId::new("find_intersections", text),
            &text,
            |b, &text| {
                b.iter(|| find_intersections(hint::black_box(text), &existing));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_auto_place,
        bench_can_place,
        bench_find_intersections
);
criterion_main!(benches);
